//=========================================================================
// Main-Thread Dispatch
//=========================================================================
//
// Channel carrying runnables from any thread to the host UI thread.
//
// Architecture:
//   any thread ──MainThreadSender::dispatch()──> crossbeam unbounded
//                                                      ↓
//   UI thread  ──MainThreadReceiver::run_pending()──> run (once per frame)
//
// `run_pending()` only runs what was queued when it was called, so a
// runnable that re-dispatches itself cannot starve the frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use crate::adapter::MainThreadDispatcher;
use crate::core::Runnable;

//=== Construction ========================================================

/// Creates a connected sender/receiver pair.
pub fn main_thread_channel() -> (MainThreadSender, MainThreadReceiver) {
    let (sender, receiver) = unbounded();
    (MainThreadSender { sender }, MainThreadReceiver { receiver })
}

//=== MainThreadSender ====================================================

/// Cloneable sending half; hand it to the adapter as its dispatcher.
#[derive(Debug, Clone)]
pub struct MainThreadSender {
    sender: Sender<Runnable>,
}

impl MainThreadDispatcher for MainThreadSender {
    /// Queues `runnable` for the UI thread.
    ///
    /// If the host has already shut down, the runnable is dropped and a
    /// warning is logged.
    fn dispatch(&self, runnable: Runnable) {
        if self.sender.send(runnable).is_err() {
            warn!(
                target: "platform::main_thread",
                "Main thread gone, dropping runnable"
            );
        }
    }
}

//=== MainThreadReceiver ==================================================

/// Receiving half, owned by the host's UI thread.
#[derive(Debug)]
pub struct MainThreadReceiver {
    receiver: Receiver<Runnable>,
}

impl MainThreadReceiver {
    /// Runs every runnable queued at call time, in dispatch order.
    ///
    /// Returns the number executed.
    pub fn run_pending(&self) -> usize {
        let queued = self.receiver.len();
        let mut ran = 0;

        while ran < queued {
            match self.receiver.try_recv() {
                Ok(runnable) => {
                    runnable.run();
                    ran += 1;
                }
                Err(_) => break,
            }
        }

        if ran > 0 {
            trace!(target: "platform::main_thread", "Ran {} main-thread runnables", ran);
        }

        ran
    }

    /// Number of runnables waiting.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
