mod diff;
mod identity;
mod revision;

pub use diff::{diff_resolutions, PinChange, PinChangeSummary};
pub use identity::{DebugDisplay, ResolvedIdentity, ResolvedKind, ShortDisplay};
pub use revision::{BranchRevision, SHORT_REVISION_LEN};
