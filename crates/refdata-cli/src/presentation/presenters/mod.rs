pub mod browse;
pub mod hierarchy;
pub mod init;
pub mod overview;
pub mod record;

pub use browse::{BrowseState, present_browse_screen, present_editor, present_picker};
pub use hierarchy::{HierarchyInput, present_candidates, present_hierarchy, present_row};
pub use init::present_init_result;
pub use overview::present_overview;
pub use record::{
    ListInput, present_delete, present_detail, present_list, present_record, present_save,
};
