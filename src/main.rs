use anyhow::Result;

fn main() -> Result<()> {
    arbor::command_line::procedures::main()
}
