use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

type Action = Box<dyn FnOnce() + Send + 'static>;

/// Hand-off half of the interactive-thread queue.
///
/// Cloneable and usable from any thread; the paired [`MainLoop`] runs
/// every queued action serially on the one thread that drains it.
#[derive(Clone)]
pub struct MainThreadDispatcher {
    tx: UnboundedSender<Action>,
}

impl MainThreadDispatcher {
    /// Queue `action` to run on the interactive thread.
    ///
    /// The hand-off is asynchronous: `action` runs strictly after this
    /// call returns, once the loop drains the queue. Dispatching after
    /// the loop is gone is a no-op.
    pub fn dispatch<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.tx.send(Box::new(action)).is_err() {
            log::debug!("main loop is gone, dropping dispatched action");
        }
    }
}

/// Serial queue of interactive-thread actions.
///
/// Exactly one thread is expected to drain the loop; every dispatched
/// action runs on that thread, in submission order.
pub struct MainLoop {
    rx: UnboundedReceiver<Action>,
}

impl MainLoop {
    pub fn new() -> (Self, MainThreadDispatcher) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { rx }, MainThreadDispatcher { tx })
    }

    /// Block the calling thread draining actions until `keep_going`
    /// returns false or every dispatcher is dropped.
    ///
    /// Must not be called from inside a tokio runtime.
    pub fn run_while<F>(&mut self, keep_going: F)
    where
        F: Fn() -> bool,
    {
        while keep_going() {
            match self.rx.blocking_recv() {
                Some(action) => action(),
                None => break,
            }
        }
    }

    /// Drain every action queued so far without blocking. Returns the
    /// number of actions run.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(action) = self.rx.try_recv() {
            action();
            ran += 1;
        }
        ran
    }

    /// Wait for the next action and run it. Returns false once every
    /// dispatcher is dropped and the queue is empty.
    pub async fn turn(&mut self) -> bool {
        match self.rx.recv().await {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }
}
