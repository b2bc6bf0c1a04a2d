//! CLI command implementations

mod add;
mod delete;
mod edit;
mod list;
mod search;
mod show;

pub use add::{AddArgs, cmd_add};
pub use delete::{DeleteArgs, cmd_delete};
pub use edit::{EditArgs, cmd_edit};
pub use list::{ListArgs, cmd_list};
pub use search::{SearchArgs, cmd_search};
pub use show::{ShowArgs, cmd_show};
