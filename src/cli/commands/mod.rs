mod promote;

pub use promote::{handle_promote_command, promote_site, PromoteOverrides};
