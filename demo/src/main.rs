//! Terminal demo: click a hex to select it, then move the mouse to preview
//! the shortest route to the hex under the pointer.

use hexpath_core::{App, GridConfig};
use hexpath_crossterm::{CrosstermDriver, HexLayout, TermView};
use hexpath_preview::Explorer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let topology = GridConfig::default().topology()?;
    log::info!("starting on a {topology}");

    let explorer = Explorer::new(topology, TermView::new(topology));
    let driver = CrosstermDriver::new(HexLayout::new(topology, 2, 1));

    let mut app = App::new(explorer, driver);
    app.run()
}
