use common::model::rfm::RfmCluster;

pub enum Msg {
    Clusters(Vec<RfmCluster>),
    LoadFailed(String),
    SetDraft(String),
    Send,
    Reply(String),
    AskFailed,
}
