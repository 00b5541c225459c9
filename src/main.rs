use core::fmt;

use cap_gate::console::Console;
use cap_gate::demo;

fn main() -> Result<(), fmt::Error> {
    let mut console = Console::stdout();
    demo::run(&mut console)?;
    console.flush()
}
