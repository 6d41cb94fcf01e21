//! Orderings over [`Process`] records.
//!
//! Every comparator orders records by exactly one attribute, either ascending (the default) or
//! descending. Sorting code only depends on the [`Compare`] trait, so a comparator can be picked
//! statically by type or at run time through [`Attribute::comparator`].
//!
//! ```
//! use procq::{compare::{Compare, PidComparator}, Process};
//! let a = Process::new("cmd", 119, 2.0, 23, 2, "System").unwrap();
//! let b = Process::new("matlab", 13, 12.5, 923, 8, "Admin").unwrap();
//!
//! assert!(PidComparator::new().compare(&a, &b).is_gt());
//! assert!(PidComparator::descending().compare(&a, &b).is_lt());
//! ```

use {
    crate::{error::Error, process::Process},
    core::{borrow::Borrow, cmp::Ordering, fmt, str::FromStr},
};

/// A three-way ordering policy over two values.
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for &C {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

impl<T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for Box<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

/// Wraps a closure into a [`Compare`] implementation.
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    FromFn(f)
}

/// A [`Compare`] built from a closure. See [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Compare<T> for FromFn<F> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// The attributes [`Process`] records can be ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Name,
    Pid,
    CpuUsage,
    TotalCpuTime,
    Threads,
    Owner,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Name,
        Attribute::Pid,
        Attribute::CpuUsage,
        Attribute::TotalCpuTime,
        Attribute::Threads,
        Attribute::Owner,
    ];

    /// Ascending order of `a` and `b` by this attribute.
    ///
    /// Text compares byte-wise. `cpu_usage` is always finite (see [`Process::new`]), so the float
    /// comparison is total.
    pub fn cmp_processes(self, a: &Process, b: &Process) -> Ordering {
        match self {
            Attribute::Name => a.name().cmp(b.name()),
            Attribute::Pid => a.pid().cmp(&b.pid()),
            Attribute::CpuUsage => a
                .cpu_usage()
                .partial_cmp(&b.cpu_usage())
                .unwrap_or(Ordering::Equal),
            Attribute::TotalCpuTime => a.total_cpu_time().cmp(&b.total_cpu_time()),
            Attribute::Threads => a.threads().cmp(&b.threads()),
            Attribute::Owner => a.owner().cmp(b.owner()),
        }
    }

    /// Builds the comparator for this attribute as a trait object.
    pub fn comparator<R: Borrow<Process>>(self, ascending: bool) -> Box<dyn Compare<R>> {
        match self {
            Attribute::Name => Box::new(NameComparator::with_order(ascending)),
            Attribute::Pid => Box::new(PidComparator::with_order(ascending)),
            Attribute::CpuUsage => Box::new(CpuUsageComparator::with_order(ascending)),
            Attribute::TotalCpuTime => Box::new(TotalCpuTimeComparator::with_order(ascending)),
            Attribute::Threads => Box::new(ThreadsComparator::with_order(ascending)),
            Attribute::Owner => Box::new(OwnerComparator::with_order(ascending)),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Attribute::Name => "name",
            Attribute::Pid => "pid",
            Attribute::CpuUsage => "cpu",
            Attribute::TotalCpuTime => "time",
            Attribute::Threads => "threads",
            Attribute::Owner => "owner",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .into_iter()
            .find(|attribute| attribute.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<_> = Attribute::ALL.iter().map(|a| a.as_str()).collect();
                Error::InvalidArgument {
                    parameter: "attribute",
                    reason: format!("unknown attribute {s:?}, expected one of {}", known.join(", ")),
                }
            })
    }
}

fn directed(ordering: Ordering, ascending: bool) -> Ordering {
    if ascending {
        ordering
    } else {
        ordering.reverse()
    }
}

macro_rules! comparator {
    ($(#[$meta:meta])* $name:ident => $attribute:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            ascending: bool,
        }

        impl $name {
            /// Creates an ascending comparator.
            pub fn new() -> Self {
                Self { ascending: true }
            }

            pub fn with_order(ascending: bool) -> Self {
                Self { ascending }
            }

            pub fn descending() -> Self {
                Self::with_order(false)
            }

            pub fn is_ascending(&self) -> bool {
                self.ascending
            }

            pub fn attribute(&self) -> Attribute {
                Attribute::$attribute
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<R: Borrow<Process>> Compare<R> for $name {
            fn compare(&self, a: &R, b: &R) -> Ordering {
                directed(
                    Attribute::$attribute.cmp_processes(a.borrow(), b.borrow()),
                    self.ascending,
                )
            }
        }
    };
}

comparator! {
    /// Orders processes by name.
    NameComparator => Name
}
comparator! {
    /// Orders processes by PID.
    PidComparator => Pid
}
comparator! {
    /// Orders processes by CPU usage percentage.
    CpuUsageComparator => CpuUsage
}
comparator! {
    /// Orders processes by total CPU time.
    TotalCpuTimeComparator => TotalCpuTime
}
comparator! {
    /// Orders processes by number of threads.
    ThreadsComparator => Threads
}
comparator! {
    /// Orders processes by owner.
    OwnerComparator => Owner
}
