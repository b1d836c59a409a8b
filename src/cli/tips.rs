//! Tips command

use crate::store::DashboardStore;

/// Print the personalized tips
pub fn handle_tips_command(store: &DashboardStore) {
    let tips = store.tips();
    if tips.is_empty() {
        println!("No tips right now.");
        return;
    }

    for tip in tips {
        println!("* {}", tip.title);
        println!("  {}", tip.body);
        println!("  More: guides/{}", tip.guide_slug);
        println!();
    }
}
