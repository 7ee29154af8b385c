//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quickdo_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use quickdo_core::TaskListController;

fn main() {
    // Tiny probe to validate core crate wiring independently from the
    // Flutter/FFI runtime setup.
    println!("quickdo_core ping={}", quickdo_core::ping());
    println!("quickdo_core version={}", quickdo_core::core_version());

    let mut controller = TaskListController::new();
    controller.open_composer_for_new();
    controller.update_draft("smoke task");
    let committed = controller.commit_draft().is_ok();
    controller.set_search_query("smoke");
    println!(
        "quickdo_core smoke commit_ok={} visible={}",
        committed,
        controller.visible_tasks().count()
    );
}
