// The software rendering engine: owns the worker threads the canvas
// rasterizes on. Initialization picks the thread count; dropping the
// engine terminates the pool.

use crate::error::Error;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

pub struct Engine {
    pool: Option<ThreadPool>, // None = render on the calling thread
    threads: usize,
}

impl Engine {
    /// Start the engine with `threads` workers. Zero means no pool at all.
    pub fn init(threads: usize) -> Result<Self, Error> {
        let pool = if threads == 0 {
            None
        } else {
            let pool = ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("raster-{i}"))
                .build()
                .map_err(|e| Error::EngineInit(e.to_string()))?;
            Some(pool)
        };
        log::debug!("engine started with {threads} worker thread(s)");
        Ok(Self { pool, threads })
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Run `job` once per item, on the pool when there is one, and block
    /// until every item is done.
    pub fn run<T, F>(&self, items: &mut [T], job: F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Sync + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(|| {
                items.par_iter_mut().enumerate().for_each(|(i, item)| job(i, item));
            }),
            None => items.iter_mut().enumerate().for_each(|(i, item)| job(i, item)),
        }
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        log::debug!("engine terminated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_threads_runs_inline() {
        let engine = Engine::init(0).unwrap();
        assert_eq!(engine.threads(), 0);

        let mut items = vec![0usize; 3];
        engine.run(&mut items, |i, v| *v = i + 1);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn pool_visits_every_item_once() {
        let engine = Engine::init(3).unwrap();
        assert_eq!(engine.threads(), 3);

        let mut items = vec![0usize; 64];
        engine.run(&mut items, |i, v| *v += i * 2);
        for (i, v) in items.iter().enumerate() {
            assert_eq!(*v, i * 2);
        }
    }
}
