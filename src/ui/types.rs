pub use crate::{ClassificationEntry, GroupEntry, StatusLevel, StatusMessage};
