/// How much of a fetch an error invalidates.
///
/// Every error is recovered at the lowest layer that can absorb it:
///
/// | Scope | Effect |
/// |-------|--------|
/// | `Record` | Skip the one instrument, keep the rest of the batch |
/// | `Source` | Treat the whole source as EMPTY, the chain moves on |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecoveryScope {
    /// A single field or line was malformed.
    Record,

    /// The request or its envelope failed; nothing from this source is usable.
    Source,
}
