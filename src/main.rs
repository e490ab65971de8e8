use clap::{
    CommandFactory, Parser, Subcommand, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use studentportal::{
    admin::DEFAULT_CHART_TOP,
    cli::{self, Chart, Resource, ResourceAction},
    config, error,
    export::ExportResource,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Administration endpoints
    Admin(AdminOptions),

    /// Student endpoints
    Student(StudentOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AdminOptions {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum AdminCommand {
    /// Log in and store the admin session
    Login {
        #[clap(long)]
        username: String,
        #[clap(long)]
        password: String,
    },

    /// Remove the stored admin session
    Logout,

    /// Show the stored admin session
    Status,

    /// Dashboard statistics
    Dashboard,

    /// Manage students
    #[command(subcommand)]
    Students(ReadableCommand),

    /// Manage subjects
    #[command(subcommand)]
    Subjects(ReadableCommand),

    /// Manage schedules
    #[command(subcommand)]
    Schedules(WritableCommand),

    /// List or remove subject registrations
    #[command(subcommand)]
    Registrations(RegistrationCommand),

    /// Manage tuition fees
    #[command(subcommand)]
    TuitionFees(WritableCommand),

    /// Chart data
    Charts(ChartOptions),

    /// Export a list as an Excel file
    Export(ExportOptions),
}

#[derive(Subcommand, Debug, Clone)]
pub enum ReadableCommand {
    /// List all entries
    List,
    /// Show a single entry
    Get { id: String },
    /// Create an entry from a JSON object
    Create {
        #[clap(long)]
        data: String,
    },
    /// Replace an entry with a JSON object
    Update {
        id: String,
        #[clap(long)]
        data: String,
    },
    /// Delete an entry
    Delete { id: String },
}

#[derive(Subcommand, Debug, Clone)]
pub enum WritableCommand {
    /// List all entries
    List,
    /// Create an entry from a JSON object
    Create {
        #[clap(long)]
        data: String,
    },
    /// Replace an entry with a JSON object
    Update {
        id: String,
        #[clap(long)]
        data: String,
    },
    /// Delete an entry
    Delete { id: String },
}

#[derive(Subcommand, Debug, Clone)]
pub enum RegistrationCommand {
    /// List all registrations
    List,
    /// Delete a registration
    Delete { id: String },
}

#[derive(Parser, Debug, Clone)]
pub struct ChartOptions {
    #[clap(value_enum)]
    pub chart: ChartKind,

    /// Number of entries for ranked charts
    #[clap(long, default_value_t = DEFAULT_CHART_TOP)]
    pub top: u32,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ChartKind {
    StudentsByDepartment,
    TopSubjects,
    SubjectsByCredits,
    TuitionStatus,
    TuitionBySemester,
    StudentsByClass,
}

#[derive(Parser, Debug, Clone)]
pub struct ExportOptions {
    #[clap(value_enum)]
    pub resource: ExportKind,

    /// Directory to save the file in
    #[clap(long)]
    pub dir: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ExportKind {
    Students,
    Subjects,
    Registrations,
    TuitionFees,
}

#[derive(Parser, Debug, Clone)]
pub struct StudentOptions {
    #[command(subcommand)]
    pub command: StudentCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum StudentCommand {
    /// Log in and store the student session
    Login {
        #[clap(long)]
        mssv: String,
        #[clap(long)]
        password: String,
    },

    /// Remove the stored student session
    Logout,

    /// Show the stored student session
    Status,

    /// Student profile
    Info {
        /// Defaults to the logged in student
        #[clap(long)]
        id: Option<String>,
    },

    /// All subjects open for registration
    Subjects,

    /// Register for a subject
    Register {
        subject_id: i64,
        #[clap(long)]
        student_id: Option<String>,
    },

    /// Subjects the student registered for
    Registered {
        #[clap(long)]
        student_id: Option<String>,
    },

    /// Cancel a registration by its registration id
    Cancel { registration_id: i64 },

    /// Weekly schedule
    Schedule {
        #[clap(long)]
        student_id: Option<String>,
    },

    /// Tuition fees
    Tuition {
        #[clap(long)]
        student_id: Option<String>,
    },

    /// Create a payment URL for a tuition fee
    Pay {
        tuition_fee_id: i64,
        /// Amount to pay
        #[clap(long)]
        amount: i64,
        #[clap(long)]
        student_id: Option<String>,
        /// Open the payment page in the browser
        #[clap(long)]
        open: bool,
    },
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn readable_action(cmd: ReadableCommand) -> ResourceAction {
    match cmd {
        ReadableCommand::List => ResourceAction::List,
        ReadableCommand::Get { id } => ResourceAction::Get(id),
        ReadableCommand::Create { data } => ResourceAction::Create(data),
        ReadableCommand::Update { id, data } => ResourceAction::Update(id, data),
        ReadableCommand::Delete { id } => ResourceAction::Delete(id),
    }
}

fn writable_action(cmd: WritableCommand) -> ResourceAction {
    match cmd {
        WritableCommand::List => ResourceAction::List,
        WritableCommand::Create { data } => ResourceAction::Create(data),
        WritableCommand::Update { id, data } => ResourceAction::Update(id, data),
        WritableCommand::Delete { id } => ResourceAction::Delete(id),
    }
}

fn chart(kind: ChartKind) -> Chart {
    match kind {
        ChartKind::StudentsByDepartment => Chart::StudentsByDepartment,
        ChartKind::TopSubjects => Chart::TopSubjects,
        ChartKind::SubjectsByCredits => Chart::SubjectsByCredits,
        ChartKind::TuitionStatus => Chart::TuitionStatus,
        ChartKind::TuitionBySemester => Chart::TuitionBySemester,
        ChartKind::StudentsByClass => Chart::StudentsByClass,
    }
}

fn export_resource(kind: ExportKind) -> ExportResource {
    match kind {
        ExportKind::Students => ExportResource::Students,
        ExportKind::Subjects => ExportResource::Subjects,
        ExportKind::Registrations => ExportResource::Registrations,
        ExportKind::TuitionFees => ExportResource::TuitionFees,
    }
}

async fn run_admin(command: AdminCommand) {
    match command {
        AdminCommand::Login { username, password } => cli::admin_login(&username, &password).await,
        AdminCommand::Logout => cli::admin_logout().await,
        AdminCommand::Status => cli::admin_status().await,
        AdminCommand::Dashboard => cli::dashboard().await,
        AdminCommand::Students(cmd) => {
            cli::resource(Resource::Students, readable_action(cmd)).await
        }
        AdminCommand::Subjects(cmd) => {
            cli::resource(Resource::Subjects, readable_action(cmd)).await
        }
        AdminCommand::Schedules(cmd) => {
            cli::resource(Resource::Schedules, writable_action(cmd)).await
        }
        AdminCommand::Registrations(cmd) => {
            let action = match cmd {
                RegistrationCommand::List => ResourceAction::List,
                RegistrationCommand::Delete { id } => ResourceAction::Delete(id),
            };
            cli::resource(Resource::Registrations, action).await
        }
        AdminCommand::TuitionFees(cmd) => {
            cli::resource(Resource::TuitionFees, writable_action(cmd)).await
        }
        AdminCommand::Charts(opt) => cli::chart(chart(opt.chart), opt.top).await,
        AdminCommand::Export(opt) => cli::export(export_resource(opt.resource), opt.dir).await,
    }
}

async fn run_student(command: StudentCommand) {
    match command {
        StudentCommand::Login { mssv, password } => cli::student_login(&mssv, &password).await,
        StudentCommand::Logout => cli::student_logout().await,
        StudentCommand::Status => cli::student_status().await,
        StudentCommand::Info { id } => cli::student_info(id).await,
        StudentCommand::Subjects => cli::subjects().await,
        StudentCommand::Register {
            subject_id,
            student_id,
        } => cli::register(subject_id, student_id).await,
        StudentCommand::Registered { student_id } => cli::registered(student_id).await,
        StudentCommand::Cancel { registration_id } => cli::cancel(registration_id).await,
        StudentCommand::Schedule { student_id } => cli::schedule(student_id).await,
        StudentCommand::Tuition { student_id } => cli::tuition(student_id).await,
        StudentCommand::Pay {
            tuition_fee_id,
            amount,
            student_id,
            open,
        } => cli::pay(tuition_fee_id, amount, student_id, open).await,
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Admin(opt) => run_admin(opt.command).await,
        Command::Student(opt) => run_student(opt.command).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
