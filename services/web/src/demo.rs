use crate::infra::{InMemoryLeadRecorder, StdoutNotifier};
use bondi_vista::error::AppError;
use bondi_vista::site::contact::{ContactField, ContactFormController, SubmissionGate};
use bondi_vista::site::landing::{render_landing_page, LandingContent, PageView};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Visitor name typed into the form
    #[arg(long, default_value = "Jane")]
    pub(crate) name: String,
    /// Visitor email address
    #[arg(long, default_value = "jane@x.com")]
    pub(crate) email: String,
    /// Optional phone number
    #[arg(long, default_value = "")]
    pub(crate) phone: String,
    /// Enquiry text
    #[arg(long, default_value = "Interested")]
    pub(crate) message: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RenderArgs {
    /// Write the page to this path instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let html = render_landing_page(&LandingContent::bondi_vista(), &PageView::default());
    match args.output {
        Some(path) => {
            std::fs::write(&path, html)?;
            println!("Landing page written to {}", path.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        name,
        email,
        phone,
        message,
    } = args;

    let recorder = Arc::new(InMemoryLeadRecorder::default());
    let notifier = Arc::new(StdoutNotifier);
    let mut controller = ContactFormController::new(recorder.clone(), notifier);

    println!("Contact form demo");
    for (field, value) in [
        (ContactField::Name, name),
        (ContactField::Email, email),
        (ContactField::Phone, phone),
        (ContactField::Message, message),
    ] {
        println!("- {} <- {:?}", field.label(), value);
        controller.handle_input_change(field, value);
    }

    if let Err(violation) = SubmissionGate.check(controller.state()) {
        println!("\nSubmit blocked by the form: {violation}");
        return Ok(());
    }

    println!("\nSubmitting enquiry");
    let outcome = controller.handle_submit();

    match serde_json::to_string_pretty(&recorder.entries()) {
        Ok(json) => println!("\nRecorded leads:\n{json}"),
        Err(err) => println!("\nRecorded leads unavailable: {err}"),
    }
    println!(
        "Delivered to sales team: {}",
        if outcome.delivered { "yes" } else { "no" }
    );
    println!(
        "Form after submit empty: {}",
        if controller.state().is_empty() { "yes" } else { "no" }
    );

    Ok(())
}
