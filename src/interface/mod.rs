pub mod prompts;
pub mod render;

pub use prompts::{prompt_activity, prompt_body_fat, prompt_target, prompt_weight, prompt_yes_no};
pub use render::{
    Report, build_report, display_activity_table, display_report, display_target_options,
    format_activity_table, low_intake_message,
};
