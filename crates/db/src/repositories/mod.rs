//! Repository abstractions for data access.

pub mod account;
pub mod disposal;
pub mod entity;
pub mod manual_journal;
pub mod mapping;
pub mod posting;
pub mod recording;

pub use account::AccountRepository;
pub use disposal::DisposalRepository;
pub use entity::EntityRepository;
pub use manual_journal::ManualJournalRepository;
pub use recording::RecordingRepository;
