//! Text views: `fmt::Display` wrappers over view models, used by the
//! console renderer in plain mode. `tui/` holds the ratatui widgets.

pub mod hierarchy;
pub mod init;
pub mod overview;
pub mod record;
pub mod tui;

pub use hierarchy::{CandidatesView, HierarchyView};
pub use init::InitResultView;
pub use overview::OverviewView;
pub use record::{DeleteResultView, RecordDetailView, RecordListView, SaveResultView};
