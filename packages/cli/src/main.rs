//! sshmgr - Manage SSH config entries from the command line

fn main() -> anyhow::Result<()> {
    sshmgr::run()
}
