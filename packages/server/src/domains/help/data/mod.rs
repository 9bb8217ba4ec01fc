pub mod help_request;
pub mod responses;

pub use help_request::{
    HelpRequestData, HelpRequestDetailData, HelpStatusData, PatientHelpRecordData, SeekHelpInput,
};
pub use responses::{HelpListData, NearbyHelpsData, PatientHistoryData, TransitionData};
