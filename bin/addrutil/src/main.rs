//! addrutil binary.

fn main() -> eyre::Result<()> {
    addrutil_cli::run()
}
