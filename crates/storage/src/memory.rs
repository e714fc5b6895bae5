use std::{collections::VecDeque, sync::Mutex};

use fitcoach_web_app::log;

/// Keeps the most recent log entries in memory, newest first.
#[derive(Default)]
pub struct Log {
    entries: Mutex<VecDeque<log::Entry>>,
}

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| log::Error::Unknown(err.to_string()))?;
        entries.push_front(entry);
        entries.truncate(log::MAX_ENTRIES);
        Ok(())
    }
}
