use std::{
    thread::{self, JoinHandle},
    time::Duration,
};

use anyhow::anyhow;

/// Pause performed per unit of load
pub const PAUSE: Duration = Duration::from_millis(500);

/// Spawn the worker thread. The load is moved into the closure, so nothing is
/// shared back with the caller besides the join handle.
pub fn spawn(load: u64) -> JoinHandle<()> {
    thread::spawn(move || {
        println!("Thread has started");
        for _ in 0..load {
            thread::sleep(PAUSE);
        }
        println!("Thread has finished");
    })
}

/// Spawn the worker and block until it has finished before printing the final
/// marker. Joining is what guarantees both worker lines land before `Done!`
pub fn run(load: u64) -> Result<(), anyhow::Error> {
    spawn(load)
        .join()
        .map_err(|_| anyhow!("Worker thread panicked"))?;

    println!("Done!");

    Ok(())
}
