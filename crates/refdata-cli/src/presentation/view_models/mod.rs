pub mod browse;
pub mod common;
pub mod hierarchy;
pub mod init;
pub mod overview;
pub mod record;
pub mod result;

pub use browse::{
    BrowseScreenViewModel, EditorViewModel, PickerDialogViewModel, PickerRowViewModel,
    StatusBarViewModel,
};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use hierarchy::{CandidatesViewModel, HierarchyRowViewModel, HierarchyViewModel};
pub use init::{DatasetInitViewModel, DatasetState, InitResultViewModel};
pub use overview::{DatasetSummaryViewModel, OverviewViewModel};
pub use record::{
    DeleteResultViewModel, ExtraFieldViewModel, RecordDetailViewModel, RecordListViewModel,
    RecordViewModel, SaveAction, SaveResultViewModel,
};
pub use result::CommandResultViewModel;
