use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// One strategy invocation as seen by the observer hook: the inputs the
/// strategy was given, the decision it returned, and an optional label a
/// training harness fills in after the set resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Hand contents at decision time, before any card was played
    pub hand: Vec<Card>,
    /// Deciding player's score after the neutral draw
    pub self_score: i32,
    /// Opponent's score at decision time
    pub opp_score: i32,
    /// Whether the opponent already stands
    pub opp_stands: bool,
    /// Whether a card was played
    pub play_card: bool,
    /// Value of the played card, 0 when none was played
    pub card_value: Card,
    /// Whether the player chose to stand
    pub stand: bool,
    /// Outcome label assigned after the set ends
    #[serde(default)]
    pub score: Option<f64>,
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

/// Observer for strategy decisions. Implementations must never fail or
/// block; recording cannot abort a turn.
pub trait DecisionSink {
    fn record(&mut self, record: &DecisionRecord);
}

use std::cell::RefCell;
use std::rc::Rc;

/// In-memory sink backed by a shared buffer. Cloning yields another
/// handle to the same buffer, so a harness can keep one handle while a
/// player owns the other and drain records after each set.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Rc<RefCell<Vec<DecisionRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains and returns everything recorded so far.
    pub fn take(&self) -> Vec<DecisionRecord> {
        std::mem::take(&mut self.records.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl DecisionSink for MemorySink {
    fn record(&mut self, record: &DecisionRecord) {
        self.records.borrow_mut().push(record.clone());
    }
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends decision records as JSONL.
pub struct DecisionLogger {
    writer: BufWriter<File>,
}

impl DecisionLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::open(path, false)
    }

    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::open(path, true)
    }

    fn open<P: AsRef<Path>>(path: P, append: bool) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    pub fn write(&mut self, record: &DecisionRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl DecisionSink for DecisionLogger {
    /// Write errors are swallowed here: the sink contract is infallible.
    fn record(&mut self, record: &DecisionRecord) {
        let _ = self.write(record);
    }
}
