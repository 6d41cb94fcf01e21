use {
    procq::{
        compare::{Attribute, Compare, NameComparator, PidComparator},
        Process, Queue,
    },
    rstest::{fixture, rstest},
    std::rc::Rc,
};

#[fixture]
fn processes() -> Vec<Rc<Process>> {
    [
        ("cmd", 119, 2.0, 23, 2, "System"),
        ("termial", 9625, 4.1, 46, 1, "Pritesh"),
        ("matlab", 13, 12.5, 923, 8, "Admin"),
        ("sum.py", 65, 2.1, 40, 4, "Pritesh"),
        ("addition.java", 325, 8.0, 132, 1, "Pritesh"),
    ]
    .into_iter()
    .map(|(name, pid, cpu, time, threads, owner)| {
        Rc::new(Process::new(name, pid, cpu, time, threads, owner).unwrap())
    })
    .collect()
}

#[fixture]
fn queue(processes: Vec<Rc<Process>>) -> Queue<Rc<Process>> {
    let mut queue = Queue::new(2).unwrap();
    queue.extend(processes);
    queue
}

fn names(ranked: &[Rc<Process>]) -> Vec<&str> {
    ranked.iter().map(|p| p.name()).collect()
}

#[rstest]
fn capacity_doubles_while_filling(processes: Vec<Rc<Process>>) {
    let mut queue = Queue::new(2).unwrap();
    let mut capacities = vec![];
    for process in processes {
        queue.enqueue(process);
        capacities.push(queue.capacity());
    }
    assert_eq!(capacities, &[2, 2, 4, 4, 8]);
    assert_eq!(queue.len(), 5);
}

#[rstest]
fn sort_by_name(queue: Queue<Rc<Process>>) {
    let ascending = queue.sorted_snapshot(&NameComparator::new());
    assert_eq!(
        names(&ascending),
        &["addition.java", "cmd", "matlab", "sum.py", "termial"]
    );

    let mut descending = queue.sorted_snapshot(&NameComparator::descending());
    descending.reverse();
    assert_eq!(names(&descending), names(&ascending));
}

#[rstest]
fn sort_by_pid(queue: Queue<Rc<Process>>) {
    let ranked = queue.sorted_snapshot(&PidComparator::default());
    let pids: Vec<_> = ranked.iter().map(|p| p.pid()).collect();
    assert_eq!(pids, &[13, 65, 119, 325, 9625]);
    assert_eq!(
        names(&ranked),
        &["matlab", "sum.py", "cmd", "addition.java", "termial"]
    );
}

#[rstest]
#[case::name(
    Attribute::Name,
    ["addition.java", "cmd", "matlab", "sum.py", "termial"],
    ["termial", "sum.py", "matlab", "cmd", "addition.java"]
)]
#[case::pid(
    Attribute::Pid,
    ["matlab", "sum.py", "cmd", "addition.java", "termial"],
    ["termial", "addition.java", "cmd", "sum.py", "matlab"]
)]
#[case::cpu(
    Attribute::CpuUsage,
    ["cmd", "sum.py", "termial", "addition.java", "matlab"],
    ["matlab", "addition.java", "termial", "sum.py", "cmd"]
)]
#[case::time(
    Attribute::TotalCpuTime,
    ["cmd", "sum.py", "termial", "addition.java", "matlab"],
    ["matlab", "addition.java", "termial", "sum.py", "cmd"]
)]
// Ties keep their FIFO order in both directions.
#[case::threads(
    Attribute::Threads,
    ["termial", "addition.java", "cmd", "sum.py", "matlab"],
    ["matlab", "sum.py", "cmd", "termial", "addition.java"]
)]
#[case::owner(
    Attribute::Owner,
    ["matlab", "termial", "sum.py", "addition.java", "cmd"],
    ["cmd", "termial", "sum.py", "addition.java", "matlab"]
)]
fn sort_by_attribute(
    queue: Queue<Rc<Process>>,
    #[case] attribute: Attribute,
    #[case] ascending: [&str; 5],
    #[case] descending: [&str; 5],
) {
    let comparator: Box<dyn Compare<Rc<Process>>> = attribute.comparator(true);
    assert_eq!(names(&queue.sorted_snapshot(&comparator)), ascending);

    let comparator: Box<dyn Compare<Rc<Process>>> = attribute.comparator(false);
    assert_eq!(names(&queue.sorted_snapshot(&comparator)), descending);
}

#[rstest]
fn snapshot_does_not_disturb_queue(mut queue: Queue<Rc<Process>>) {
    for attribute in Attribute::ALL {
        queue.sorted_snapshot(&attribute.comparator::<Rc<Process>>(false));
    }
    assert_eq!(queue.len(), 5);
    assert_eq!(queue.capacity(), 8);

    let drained: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
    assert_eq!(
        names(&drained),
        &["cmd", "termial", "matlab", "sum.py", "addition.java"]
    );
    assert!(queue.is_empty());
}

#[test]
fn empty_queue() {
    let mut queue = Queue::<Rc<Process>>::new(2).unwrap();
    assert!(queue.dequeue().is_none());
    assert!(queue.peek_front().is_none());
    assert_eq!(queue.len(), 0);
    assert!(queue.sorted_snapshot(&NameComparator::new()).is_empty());
}

#[rstest]
fn dequeue_past_empty_keeps_capacity(processes: Vec<Rc<Process>>) {
    let mut queue = Queue::new(2).unwrap();
    queue.enqueue(processes[0].clone());
    assert_eq!(queue.peek_front().map(|p| p.name()), Some("cmd"));
    assert_eq!(queue.dequeue().map(|p| p.pid()), Some(119));
    assert!(queue.dequeue().is_none());
    assert_eq!(queue.capacity(), 2);
}

#[rstest]
fn queue_renders_as_table(queue: Queue<Rc<Process>>) {
    let rendered = queue.to_string();
    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "------------");
    assert_eq!(lines[1], "cmd\t119\t2\t23\t2\tSystem");
    assert_eq!(lines[6], "------------");
}
