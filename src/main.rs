fn main() -> anyhow::Result<()> {
    pollster::block_on(wirecube::run())
}
