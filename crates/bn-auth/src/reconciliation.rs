/// Outcome of [`SessionManager::reconcile`](crate::SessionManager::reconcile).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Provider and store agree.
    Consistent,
    /// A stored session had no live identity behind it and was cleared.
    ClearedStaleSession,
    /// A live identity had no stored session and was signed out.
    SignedOutUnlinkedIdentity,
}
