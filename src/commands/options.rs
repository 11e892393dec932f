use anyhow::Result;

use super::AppDashboard;
use crate::render::Render;

pub fn run(dashboard: &AppDashboard) -> Result<()> {
    println!("{}", dashboard.filter_options().render());
    Ok(())
}
