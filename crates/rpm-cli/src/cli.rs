//! Command argument wrappers and command handlers.
//!
//! Form flags are collected into [`FormArgs`], converted into a core
//! [`FormInput`] and layered over the optional form file:
//!
//! ```text
//! --form FILE → FormInput ─┐
//!                          ├─ merge → FormInput::into_form → FormData
//! form flags  → FormInput ─┘
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use log::{debug, info};
use rpm_core::{
    build_prompt,
    catalog::{EducationLevel, GraduateDimension, PedagogicalPractice},
    result_schema, FormData, FormInput, GeneratorBuilder, OperationStatus, OptionCatalog,
    RpmDocument, Session, GENERATION_FAILED_MESSAGE,
};

use crate::renderer::TerminalRenderer;

/// Form fields. Every flag is optional and overrides the form file.
#[derive(Args, Debug, Default)]
pub struct FormArgs {
    /// TOML or JSON form file (camelCase keys); flags override its values
    #[arg(long, value_name = "FILE")]
    pub form: Option<PathBuf>,

    /// Name of the school
    #[arg(long)]
    pub school: Option<String>,

    /// Name of the subject teacher
    #[arg(long)]
    pub teacher: Option<String>,

    /// Teacher's NIP
    #[arg(long)]
    pub teacher_nip: Option<String>,

    /// Name of the principal
    #[arg(long)]
    pub principal: Option<String>,

    /// Principal's NIP
    #[arg(long)]
    pub principal_nip: Option<String>,

    /// Education level: SD, SMP or SMA
    #[arg(long)]
    pub level: Option<EducationLevel>,

    /// Grade offered at the level, e.g. 10
    #[arg(long)]
    pub grade: Option<String>,

    /// Subject (mata pelajaran)
    #[arg(long)]
    pub subject: Option<String>,

    /// Capaian Pembelajaran text
    #[arg(long)]
    pub outcomes: Option<String>,

    /// Main learning material
    #[arg(long)]
    pub material: Option<String>,

    /// Number of meetings, 1 to 10
    #[arg(long)]
    pub meetings: Option<u32>,

    /// Duration of each meeting
    #[arg(long)]
    pub duration: Option<String>,

    /// Practice per meeting, comma separated in meeting order
    #[arg(long = "practice", value_delimiter = ',')]
    pub practices: Vec<PedagogicalPractice>,

    /// Graduate dimension, repeat or comma separate
    #[arg(long = "dimension", value_delimiter = ',')]
    pub dimensions: Vec<GraduateDimension>,
}

impl FormArgs {
    /// Load the form file, apply the flags and normalise the result.
    pub fn into_form(self) -> Result<FormData> {
        let base = match &self.form {
            Some(path) => FormInput::from_path(path)
                .with_context(|| format!("Failed to load form {}", path.display()))?,
            None => FormInput::default(),
        };
        base.merge(self.into())
            .into_form()
            .context("Invalid form input")
    }
}

impl From<FormArgs> for FormInput {
    fn from(args: FormArgs) -> Self {
        FormInput {
            school_name: args.school,
            teacher_name: args.teacher,
            teacher_nip: args.teacher_nip,
            principal_name: args.principal,
            principal_nip: args.principal_nip,
            education_level: args.level,
            grade: args.grade,
            subject: args.subject,
            learning_outcomes: args.outcomes,
            learning_material: args.material,
            meeting_count: args.meetings,
            meeting_duration: args.duration,
            pedagogical_practices: (!args.practices.is_empty()).then_some(args.practices),
            graduate_dimensions: (!args.dimensions.is_empty()).then_some(args.dimensions),
        }
    }
}

/// Generate an RPM
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Print the plan as JSON instead of a rendered document
    #[arg(long)]
    pub json: bool,
}

/// Command handlers sharing configuration and output settings.
pub struct Cli {
    config_path: Option<PathBuf>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(config_path: Option<PathBuf>, renderer: TerminalRenderer) -> Self {
        Self {
            config_path,
            renderer,
        }
    }

    /// Run one generation. Ctrl-C abandons the request.
    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let GenerateArgs { form, json } = args;
        let generator = GeneratorBuilder::new()
            .with_config_path(self.config_path.as_ref())
            .build()
            .context("Failed to initialize generator")?;

        let mut session = Session::with_form(form.into_form()?);
        let pending = session.begin_submit()?;
        debug!("Submitting form: {pending:?}");

        let outcome = tokio::select! {
            outcome = generator.generate(&pending) => outcome,
            _ = tokio::signal::ctrl_c() => {
                session.abandon_submit();
                bail!("Generation cancelled");
            }
        };
        session.finish_submit(outcome);

        let Some(output) = session.output() else {
            let message = session.error().unwrap_or(GENERATION_FAILED_MESSAGE);
            self.renderer
                .render(&OperationStatus::failure(message).to_string())?;
            bail!("generation failed");
        };

        info!(
            "Generated RPM with {} meetings",
            output.learning_experience.len()
        );
        if json {
            println!(
                "{}",
                serde_json::to_string_pretty(output).context("Failed to serialize plan")?
            );
        } else {
            let document = RpmDocument::new(output).generated_at(session.generated_at());
            self.renderer.render(&document.to_string())?;
        }
        Ok(())
    }

    /// Print the prompt for the form as plain text.
    pub fn prompt(&self, args: FormArgs) -> Result<()> {
        let form = args.into_form()?;
        println!("{}", build_prompt(&form));
        Ok(())
    }

    pub fn schema(&self) -> Result<()> {
        let schema =
            serde_json::to_string_pretty(&result_schema()).context("Failed to serialize schema")?;
        println!("{schema}");
        Ok(())
    }

    pub fn options(&self) -> Result<()> {
        self.renderer.render(&OptionCatalog.to_string())
    }

    /// Print the complete form, defaults included, as TOML.
    pub fn template(&self, args: FormArgs) -> Result<()> {
        let form = args.into_form()?;
        let text =
            toml::to_string(&FormInput::from(&form)).context("Failed to serialize form")?;
        print!("{text}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::args::{Args, Commands};

    fn form_args(argv: &[&str]) -> FormArgs {
        let mut full = vec!["rpmgen", "prompt"];
        full.extend_from_slice(argv);
        match Args::parse_from(full).command {
            Some(Commands::Prompt(args)) => args,
            _ => panic!("expected prompt command"),
        }
    }

    #[test]
    fn test_flags_build_a_form() {
        let form = form_args(&[
            "--school",
            "SD Negeri 2 Solo",
            "--level",
            "sd",
            "--grade",
            "5",
            "--practice",
            "Inkuiri,PjBL,Station Learning",
            "--dimension",
            "Kreativitas",
            "--dimension",
            "Komunikasi",
        ])
        .into_form()
        .unwrap();

        assert_eq!(form.school_name, "SD Negeri 2 Solo");
        assert_eq!(form.education_level, EducationLevel::Sd);
        assert_eq!(form.grade, "5");
        assert_eq!(form.meeting_count(), 3);
        assert_eq!(
            form.pedagogical_practices(),
            &[
                PedagogicalPractice::Inkuiri,
                PedagogicalPractice::PjBL,
                PedagogicalPractice::StationLearning
            ]
        );
        assert_eq!(form.graduate_dimensions().len(), 2);
    }

    #[test]
    fn test_no_flags_is_default_form() {
        let form = form_args(&[]).into_form().unwrap();
        assert_eq!(form, FormData::default());
    }

    #[test]
    fn test_unknown_practice_is_rejected_by_parser() {
        let result = Args::try_parse_from(["rpmgen", "prompt", "--practice", "Ceramah"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_grade_is_reported() {
        let err = form_args(&["--level", "SMP", "--grade", "10"])
            .into_form()
            .unwrap_err();
        assert!(format!("{err:#}").contains("grade"));
    }
}
