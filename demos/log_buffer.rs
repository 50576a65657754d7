//! Fixed-size circular log buffer example.
//!
//! New lines are pushed at the back; once the window is full the oldest line
//! is evicted from the front. Every retained line is read in place with `at`.

use anyhow::{Context, Result};
use ringdeque::RingDeque;

const WINDOW: usize = 5;

fn main() -> Result<()> {
    println!("Circular Log Buffer Example");
    println!("===========================");

    let mut log = RingDeque::new();
    for (i, line) in [
        "boot", "mount /", "start sshd", "start cron", "login root", "sudo -i", "shutdown",
    ]
    .iter()
    .enumerate()
    {
        if log.len() == WINDOW {
            let evicted = log.try_pop_front().context("window reported full")?;
            println!("  evicted: {evicted}");
        }
        log.push_back(format!("[{i:03}] {line}"));
    }

    println!("\nRetained ({} of {} slots):", log.len(), log.capacity());
    for i in 0..log.len() {
        println!("  {}", log.at(i)?);
    }

    // Cycle the window so the newest entry leads.
    log.rotate(-1);
    println!("\nNewest first: {}", log.try_front()?);

    Ok(())
}
