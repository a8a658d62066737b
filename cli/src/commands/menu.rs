use std::io::IsTerminal;
use std::path::Path;

use termcolor::{ColorChoice, StandardStream};
use todo_core::{FileStore, NoteCatalog};
use tracing::{debug, warn};

use crate::{menu::CommandLoop, terminal::Console};

pub fn menu_cmd(file_path: &Path) {
    let interactive = std::io::stdout().is_terminal();
    let stdin = std::io::stdin();
    let console = Console::new(stdin.lock(), StandardStream::stdout(color_choice()))
        .with_clear(interactive);

    debug!(path = %file_path.display(), "Starting interactive menu");
    let mut menu = CommandLoop::new(NoteCatalog::new(FileStore::new(file_path)), console);

    // A broken terminal ends the session like end of input does
    if let Err(e) = menu.run() {
        warn!(error = %e, "Terminal I/O failed, leaving menu");
    }
}

pub fn color_choice() -> ColorChoice {
    if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
