//! Single-threaded, UI-affine execution context
//!
//! A [`UiThread`] owns some state `S` on a dedicated OS thread and applies
//! jobs to it one at a time, in the order they were queued. Async work runs
//! wherever the caller runs; only state reads and writes cross over to the
//! UI thread.

use std::fmt;
use std::thread::{self, JoinHandle, ThreadId};

use tokio::sync::{mpsc, oneshot};

use crate::error::UiThreadError;

type UiJob<S> = Box<dyn FnOnce(&mut S) + Send + 'static>;

/// Handle to a thread that exclusively owns `S`.
///
/// Dropping the handle closes the job queue; the thread finishes the jobs
/// already queued and exits.
pub struct UiThread<S> {
    sender: Option<mpsc::UnboundedSender<UiJob<S>>>,
    thread: Option<JoinHandle<()>>,
    thread_id: ThreadId,
    name: String,
}

impl<S> fmt::Debug for UiThread<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiThread")
            .field("name", &self.name)
            .field("thread_id", &self.thread_id)
            .field("running", &self.is_running())
            .finish()
    }
}

impl<S: Send + 'static> UiThread<S> {
    /// Spawn the UI thread and move `state` onto it.
    pub fn spawn(name: impl Into<String>, state: S) -> std::io::Result<Self> {
        let name = name.into();
        let (sender, mut receiver) = mpsc::unbounded_channel::<UiJob<S>>();

        let thread = thread::Builder::new().name(name.clone()).spawn(move || {
            let mut state = state;
            while let Some(job) = receiver.blocking_recv() {
                job(&mut state);
            }
            log::debug!("[UiThread] Job queue closed, exiting");
        })?;

        log::debug!("[UiThread] Spawned '{}'", name);

        Ok(Self {
            sender: Some(sender),
            thread_id: thread.thread().id(),
            thread: Some(thread),
            name,
        })
    }
}

impl<S> UiThread<S> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }

    /// Whether the calling code is running on this UI thread.
    pub fn is_current(&self) -> bool {
        thread::current().id() == self.thread_id
    }

    pub fn is_running(&self) -> bool {
        self.sender
            .as_ref()
            .is_some_and(|sender| !sender.is_closed())
    }

    /// Queue `job` without waiting for it to run.
    pub fn dispatch<F>(&self, job: F) -> Result<(), UiThreadError>
    where
        F: FnOnce(&mut S) + Send + 'static,
    {
        let sender = self.sender.as_ref().ok_or(UiThreadError::Closed)?;
        sender
            .send(Box::new(job))
            .map_err(|_| UiThreadError::Closed)
    }

    /// Run `f` against the state on the UI thread and wait for its result.
    pub async fn update<F, R>(&self, f: F) -> Result<R, UiThreadError>
    where
        F: FnOnce(&mut S) -> R + Send + 'static,
        R: Send + 'static,
    {
        let (reply, result) = oneshot::channel();
        self.dispatch(move |state| {
            // The caller may have stopped waiting; nothing to do then.
            let _ = reply.send(f(state));
        })?;
        result.await.map_err(|_| UiThreadError::Closed)
    }

    /// Read from the state on the UI thread.
    pub async fn read<F, R>(&self, f: F) -> Result<R, UiThreadError>
    where
        F: FnOnce(&S) -> R + Send + 'static,
        R: Send + 'static,
    {
        self.update(move |state| f(state)).await
    }
}

impl<S> Drop for UiThread<S> {
    fn drop(&mut self) {
        self.sender.take();

        if let Some(thread) = self.thread.take() {
            // A job that owns its own handle must not join itself.
            if thread::current().id() == self.thread_id {
                return;
            }
            if thread.join().is_err() {
                log::warn!("[UiThread] '{}' panicked while running a job", self.name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::sync::mpsc as std_mpsc;
    use std::time::Duration;

    #[tokio::test]
    async fn jobs_run_in_queue_order() {
        let ui = UiThread::spawn("ui-order", Vec::<u32>::new()).unwrap();

        for n in 0..10 {
            ui.dispatch(move |log| log.push(n)).unwrap();
        }
        let seen = ui.read(|log| log.clone()).await.unwrap();

        assert_eq!(seen, (0..10).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn jobs_run_on_the_ui_thread() {
        let ui = UiThread::spawn("ui-affinity", ()).unwrap();
        let expected = ui.thread_id();

        let (ran_on, name) = ui
            .read(|_| {
                let current = thread::current();
                (current.id(), current.name().map(str::to_string))
            })
            .await
            .unwrap();

        assert_eq!(ran_on, expected);
        assert_ne!(ran_on, thread::current().id());
        assert_eq!(name.as_deref(), Some("ui-affinity"));
        assert!(!ui.is_current());
    }

    #[tokio::test]
    async fn update_returns_value() {
        let ui = UiThread::spawn("ui-update", 41_u32).unwrap();

        let value = ui
            .update(|n| {
                *n += 1;
                *n
            })
            .await
            .unwrap();

        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn panicking_job_closes_the_thread() {
        let ui = UiThread::spawn("ui-panic", ()).unwrap();

        let result = ui.update(|_| -> () { panic!("boom") }).await;

        assert_eq!(result, Err(UiThreadError::Closed));
    }

    #[test]
    fn drop_finishes_queued_jobs() {
        let drained = Arc::new(Mutex::new(Vec::new()));
        let ui = UiThread::spawn("ui-drain", ()).unwrap();

        for n in 0..50_u32 {
            let drained = Arc::clone(&drained);
            ui.dispatch(move |_| {
                thread::sleep(Duration::from_millis(1));
                drained.lock().push(n);
            })
            .unwrap();
        }
        drop(ui);

        assert_eq!(*drained.lock(), (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn dropping_last_handle_on_ui_thread_does_not_join() {
        let ui = Arc::new(UiThread::spawn("ui-self-drop", ()).unwrap());
        let (gate_tx, gate_rx) = std_mpsc::channel::<()>();
        let (done_tx, done_rx) = std_mpsc::channel::<()>();

        let last_handle = Arc::clone(&ui);
        ui.dispatch(move |_| {
            gate_rx.recv().unwrap();
            drop(last_handle);
            done_tx.send(()).unwrap();
        })
        .unwrap();
        drop(ui);
        gate_tx.send(()).unwrap();

        assert_eq!(done_rx.recv_timeout(Duration::from_secs(2)), Ok(()));
    }
}
