//! Prints a small process table in FIFO order, then ranked by one attribute.
//!
//! ```text
//! RUST_LOG=debug cargo run --example process_table -- --by threads --descending
//! ```

use {
    anyhow::Result,
    clap::Parser,
    env_logger::Env,
    log::info,
    procq::{compare::Attribute, Process, Queue},
    std::rc::Rc,
};

#[derive(Parser, Debug)]
#[command(version, about = "Rank a queue of processes by one attribute")]
struct Args {
    /// Attribute to rank by: name, pid, cpu, time, threads or owner
    #[arg(short = 'b', long = "by", default_value = "name")]
    by: Attribute,

    /// Rank in descending order
    #[arg(short = 'd', long = "descending")]
    descending: bool,

    /// Initial capacity of the queue
    #[arg(short = 'c', long = "capacity", default_value_t = 2)]
    capacity: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut queue = Queue::new(args.capacity)?;
    for (name, pid, cpu, time, threads, owner) in [
        ("cmd", 119, 2.0, 23, 2, "System"),
        ("termial", 9625, 4.1, 46, 1, "Pritesh"),
        ("matlab", 13, 12.5, 923, 8, "Admin"),
        ("sum.py", 65, 2.1, 40, 4, "Pritesh"),
        ("addition.java", 325, 8.0, 132, 1, "Pritesh"),
    ] {
        queue.enqueue(Rc::new(Process::new(name, pid, cpu, time, threads, owner)?));
    }
    info!("queued {} processes in {} slots", queue.len(), queue.capacity());

    print!("{queue}");

    let comparator = args.by.comparator::<Rc<Process>>(!args.descending);
    let order = if args.descending { "descending" } else { "ascending" };
    info!("ranking by {} ({})", args.by, order);
    println!();
    for process in queue.sorted_snapshot(&comparator) {
        println!("{process}");
    }
    println!();

    Ok(())
}
