//! Run searches off the calling thread.
//!
//! A [`Worker`] owns a background thread that receives [`SearchRequest`]s over a channel and
//! sends back one reply per request, in order. An [`Engine`] uses a worker when one can be
//! started, and otherwise runs the same search on the calling thread.
use crate::finder::Finder;
use crate::search::{SearchRequest, SearchResponse};
use crate::Error;
use log::{debug, warn};
use std::sync::mpsc::{channel, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

type Reply = Result<SearchResponse, Error>;

struct Job {
    request: SearchRequest,
    reply: Sender<Reply>,
}

/// A search thread.
///
/// Dropping the worker closes the request channel and waits for the thread to finish.
pub struct Worker {
    sender: Option<Sender<Job>>,
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    /// Start a worker thread that searches with `finder`.
    /// ## Errors
    /// If the thread can not be started.
    /// ## Examples
    /// ```
    /// # use std::sync::Arc;
    /// use ordfinder::{Filters, Finder, SearchRequest, Worker};
    /// let finder = Finder::default().with_dictionary_from_words(&["kat", "ko"]);
    /// let worker = Worker::spawn(Arc::new(finder))?;
    /// let response = worker.search(SearchRequest::new("tak", Filters::new()))?;
    /// assert_eq!(response.total_found, 1);
    /// # Ok::<(), ordfinder::Error>(())
    /// ```
    pub fn spawn(finder: Arc<Finder>) -> Result<Worker, Error> {
        let (sender, receiver) = channel::<Job>();
        let handle = thread::Builder::new()
            .name(String::from("ordfinder-worker"))
            .spawn(move || {
                for job in receiver {
                    let reply = finder.handle(&job.request);
                    if job.reply.send(reply).is_err() {
                        debug!("search reply dropped, caller is gone");
                    }
                }
                debug!("search worker stopped");
            })
            .map_err(Error::WorkerSpawn)?;
        Ok(Worker {
            sender: Some(sender),
            handle: Some(handle),
        })
    }

    /// Send `request` to the worker and wait for the reply.
    /// ## Errors
    /// - The search errors, see [`search`](crate::search::search).
    /// - [`Error::WorkerDisconnected`] if the worker thread is gone.
    pub fn search(&self, request: SearchRequest) -> Reply {
        let sender = self.sender.as_ref().ok_or(Error::WorkerDisconnected)?;
        let (reply, receiver) = channel();
        sender
            .send(Job { request, reply })
            .map_err(|_| Error::WorkerDisconnected)?;
        receiver.recv().map_err(|_| Error::WorkerDisconnected)?
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        drop(self.sender.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("search worker panicked");
            }
        }
    }
}

/// Runs searches on a [`Worker`] when available, else on the calling thread.
/// Both give the same results.
pub enum Engine {
    Offloaded { worker: Worker, finder: Arc<Finder> },
    Inline(Arc<Finder>),
}

impl Engine {
    /// Start an engine with a worker thread. If the worker can not be started, searches run on
    /// the calling thread.
    pub fn start(finder: Finder) -> Engine {
        let finder = Arc::new(finder);
        match Worker::spawn(Arc::clone(&finder)) {
            Ok(worker) => Engine::Offloaded { worker, finder },
            Err(err) => {
                warn!("{}, searching on the calling thread", err);
                Engine::Inline(finder)
            }
        }
    }

    /// An engine that always searches on the calling thread.
    pub fn inline(finder: Finder) -> Engine {
        Engine::Inline(Arc::new(finder))
    }

    pub fn is_offloaded(&self) -> bool {
        matches!(self, Engine::Offloaded { .. })
    }

    pub fn finder(&self) -> &Finder {
        match self {
            Engine::Offloaded { finder, .. } | Engine::Inline(finder) => finder,
        }
    }

    /// Run `request`. If the worker has stopped, the search is run on the calling thread.
    /// ## Errors
    /// If the rack or the filters are not valid.
    pub fn search(&self, request: SearchRequest) -> Reply {
        match self {
            Engine::Offloaded { worker, finder } => match worker.search(request.clone()) {
                Err(Error::WorkerDisconnected) => {
                    warn!("search worker disconnected, searching on the calling thread");
                    finder.handle(&request)
                }
                reply => reply,
            },
            Engine::Inline(finder) => finder.handle(&request),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::Filters;

    type Result<T> = std::result::Result<T, Error>;

    fn finder() -> Finder {
        Finder::default().with_dictionary_from_words(&[
            "træ", "nor", "træon", "mand", "kat", "mor", "katte", "ko",
        ])
    }

    #[test]
    fn test_worker() -> Result<()> {
        let worker = Worker::spawn(Arc::new(finder()))?;
        let response = worker.search(SearchRequest::new("træon", Filters::new()))?;
        let words: Vec<&str> = response.results.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["TRÆON", "TRÆ", "NOR"]);
        Ok(())
    }

    #[test]
    fn test_worker_error() -> Result<()> {
        let worker = Worker::spawn(Arc::new(finder()))?;
        let result = worker.search(SearchRequest::new("k@t", Filters::new()));
        assert!(matches!(result, Err(Error::InvalidCharacter('@'))));
        // the worker is still running
        assert!(!worker.search(SearchRequest::new("kat", Filters::new()))?.is_empty());
        Ok(())
    }

    #[test]
    fn test_engine_same_results() -> Result<()> {
        let offloaded = Engine::start(finder());
        let inline = Engine::inline(finder());
        assert!(!inline.is_offloaded());
        for rack in &["træon", "matk?e", "o?", "zzz"] {
            let filters = Filters::new().with_board_pattern("*");
            let request = SearchRequest::new(rack, filters);
            let a = offloaded.search(request.clone())?;
            let b = inline.search(request)?;
            assert_eq!(a.results, b.results);
        }
        Ok(())
    }

    #[test]
    fn test_engine_fallback() -> Result<()> {
        let engine = Engine::start(finder());
        if let Engine::Offloaded { worker, .. } = &engine {
            assert!(worker.sender.is_some());
        }
        let engine = match engine {
            Engine::Offloaded { mut worker, finder } => {
                // stop the worker thread
                drop(worker.sender.take());
                Engine::Offloaded { worker, finder }
            }
            inline => inline,
        };
        let response = engine.search(SearchRequest::new("kat", Filters::new()))?;
        assert_eq!(response.total_found, 1);
        Ok(())
    }
}
