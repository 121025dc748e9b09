//! Shared fixtures for unit tests (in `src/`) and integration tests (in
//! `tests/`). Compiled for tests and behind the `test-support` feature.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{ImageUrls, Sock, split_tags};

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Freeze the clock at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Clock frozen at [`fixture_timestamp`], boxed for injection.
    pub fn shared() -> Arc<dyn Clock> {
        Arc::new(Self::new(fixture_timestamp()))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Instant used by [`FixedClock::shared`].
///
/// # Panics
/// Never in practice; the literal date is valid.
pub fn fixture_timestamp() -> DateTime<Utc> {
    match Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).single() {
        Some(instant) => instant,
        None => panic!("fixture timestamp must be a valid UTC instant"),
    }
}

/// Build a sock with the store's aggregated tag string.
pub fn sock(id: &str, name: &str, price: f32, count: i32, tags: &str) -> Sock {
    Sock {
        id: id.to_owned(),
        name: name.to_owned(),
        description: format!("{name} socks"),
        images: ImageUrls::new(format!("/catalogue/images/{id}_1.jpeg"), ""),
        price,
        count,
        tags: split_tags(tags),
    }
}

/// A small catalogue resembling the demo dataset.
pub fn sample_socks() -> Vec<Sock> {
    vec![
        sock("3395a43e", "Weave special", 17.15, 33, "geek,formal"),
        sock("510a0d7e", "Crossed", 17.32, 738, "blue,action,red,formal"),
        sock("808a2de1", "Holy", 99.99, 1, "magic,action"),
        sock("819e1fbf", "Colourful", 18.0, 438, "brown,blue"),
        sock("837ab141", "Figueroa", 14.0, 808, "green,formal,blue"),
        sock("a0a4f044", "Nerd leg", 7.99, 115, "blue,skin"),
        sock("d3588630", "YouTube.sock", 10.99, 801, "geek,formal"),
        sock("zzz4f044", "SuperSport XL", 15.0, 820, "sport,formal,black"),
        sock("03fef6ac", "Classic", 12.0, 127, "brown,green"),
    ]
}

/// `count` generated socks, tagged `red` when their index is even.
pub fn numbered_socks(count: usize) -> Vec<Sock> {
    (0..count)
        .map(|index| {
            let tags = if index % 2 == 0 { "red" } else { "blue" };
            sock(&format!("sock-{index:03}"), &format!("Sock {index}"), 5.0, 10, tags)
        })
        .collect()
}

pub mod cap_fs {
    //! Capability-scoped file helpers for test directories.

    use std::io;
    use std::path::Path;

    use cap_std::{ambient_authority, fs::Dir};

    /// Write `contents` to `relative` inside `root`, creating parent directories.
    pub fn write_file(root: &Path, relative: &str, contents: &[u8]) -> io::Result<()> {
        let dir = Dir::open_ambient_dir(root, ambient_authority())?;
        if let Some(parent) = Path::new(relative).parent() {
            if !parent.as_os_str().is_empty() {
                dir.create_dir_all(parent)?;
            }
        }
        dir.write(relative, contents)
    }
}
