use clap::Subcommand;
use pomodesk_core::SettingField;

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print phase durations as JSON
    Show,
    /// Nudge one duration by a number of minutes (clamped to its range)
    Adjust {
        /// workTime, shortBreak or longBreak
        field: String,
        /// Minutes to add; negative to subtract
        #[arg(allow_negative_numbers = true)]
        delta: i32,
    },
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = super::open_quiet_session()?;
    match action {
        SettingsAction::Show => {}
        SettingsAction::Adjust { field, delta } => {
            let field: SettingField = field.parse()?;
            session.adjust(field, delta);
        }
    }
    println!("{}", serde_json::to_string_pretty(session.engine().settings())?);
    Ok(())
}
