use anyhow::Context;
use bimtrack::{analyzer, auth, cli, config, error, export, logging, storage};
use bimtrack_common::{
    ComparisonTable, DashboardStats, LocalProjectStore, Project, ProjectFilter, ProjectStore, StoreEvent,
    TextSummary,
};
use chrono::Local;
use clap::Parser;
use cli::{AuthCommands, Cli, Commands};
use config::Config;
use dialoguer::{Confirm, Password};
use error::BimTrackError;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use storage::FileStorage;

type Store = LocalProjectStore<FileStorage>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = Config::load()?;
    if let Some(dir) = cli.data_dir.clone() {
        config.data_dir = Some(dir);
    }

    let data_dir = config.data_dir()?;
    tracing::debug!(data_dir = %data_dir.display(), "armazenamento local");

    let store = LocalProjectStore::new(FileStorage::new(&data_dir));
    store.subscribe(Box::new(|event: &StoreEvent| tracing::debug!(?event, "store alterado")));

    match cli.command {
        Commands::Projects { search, status } => {
            let projects = store.list()?;
            let filter = ProjectFilter::new(search.unwrap_or_default(), status);
            let visible = filter.apply(&projects);

            println!("🏗  Obras ({} de {})\n", visible.len(), projects.len());
            for project in visible {
                println!(
                    "  [{}] {} - {} | {} | {}% | alertas: {}",
                    project.id,
                    project.name,
                    project.client,
                    project.status.label(),
                    project.progress,
                    project.alerts_count
                );
            }
        }

        Commands::Show { id } => {
            let project = find_project(&store, &id)?;
            print_project(&project);
        }

        Commands::Dashboard => {
            let stats = DashboardStats::from_projects(&store.list()?);
            println!("📊 Painel\n");
            println!("  Obras: {}", stats.total_projects);
            println!("  Em andamento: {}", stats.active_projects);
            println!("  Concluídas: {}", stats.completed_projects);
            println!("  Alertas: {}", stats.total_alerts);
            println!("  Obras analisadas: {}", stats.analysed_projects);
            match stats.average_progress {
                Some(avg) => println!("  Progresso médio: {:.1}%", avg),
                None => println!("  Progresso médio: -"),
            }
        }

        Commands::Analyze { id, plan, images } => {
            let project = find_project(&store, &id)?;
            println!("📸 bimtrack - análise de \"{}\"\n", project.name);

            println!("[1/3] Validando arquivos...");
            let submission = analyzer::prepare_submission(plan.as_deref(), &images)?;
            println!(
                "✔ Planejamento: {} ({} abas) | {} fotos\n",
                submission.plan.file_name,
                submission.plan.sheets.len(),
                submission.images.len()
            );

            println!("[2/3] Enviando para análise...");
            let client = analyzer::AnalysisClient::new(&config.analysis_url, config.timeout())?;
            let spinner = spinner(&format!("aguardando {}", client.url()));
            let rows = client.submit(&submission.plan, &submission.images).await;
            spinner.finish_and_clear();
            let rows = rows?;
            println!("✔ {} dias recebidos\n", rows.len());

            println!("[3/3] Gravando resultado...");
            report_outcome(analyzer::apply_result(&store, &id, rows)?);
        }

        Commands::Import { id, input } => {
            find_project(&store, &id)?;
            let content = std::fs::read_to_string(&input)
                .with_context(|| format!("falha ao ler {}", input.display()))?;
            let rows = analyzer::interpret_response(200, &content)?;
            report_outcome(analyzer::apply_result(&store, &id, rows)?);
        }

        Commands::Report { id, format, output } => {
            let project = find_project(&store, &id)?;
            println!("📄 bimtrack - relatório\n");
            let output = output.unwrap_or_else(|| PathBuf::from("."));
            export::export_report(&project, &format, &output)?;
            println!("\n✅ Exportação concluída");
        }

        Commands::Reset { yes } => {
            let confirmed = yes
                || Confirm::new()
                    .with_prompt("Apagar todas as obras salvas e voltar aos dados iniciais?")
                    .default(false)
                    .interact()?;
            if confirmed {
                store.reset()?;
                println!("✔ Dados apagados");
            } else {
                println!("Cancelado");
            }
        }

        Commands::Auth { command } => {
            let client = auth::AuthClient::new(&config.api_base_url, config.timeout())?;
            let auth = auth::Auth::new(client, FileStorage::new(&data_dir));
            run_auth(&auth, command).await?;
        }

        Commands::Config { set_analysis_url, set_api_url, show } => {
            run_config(set_analysis_url, set_api_url, show)?;
        }
    }

    Ok(())
}

fn run_config(
    set_analysis_url: Option<String>,
    set_api_url: Option<String>,
    show: bool,
) -> anyhow::Result<()> {
    // sem as variáveis de ambiente, para não gravá-las no arquivo
    let path = Config::config_path()?;
    let mut config = Config::load_from(&path)?;

    if set_analysis_url.is_some() || set_api_url.is_some() {
        if let Some(url) = set_analysis_url {
            config.analysis_url = url;
        }
        if let Some(url) = set_api_url {
            config.api_base_url = url;
        }
        config.save_to(&path)?;
        println!("✔ Configuração salva: {}", path.display());
    }

    if show {
        println!("Configuração:");
        println!("  Serviço de análise: {}", config.analysis_url);
        println!("  API de autenticação: {}", config.api_base_url);
        println!("  Pasta de dados: {}", config.data_dir()?.display());
        println!("  Timeout: {}s", config.timeout_seconds);
    }

    Ok(())
}

async fn run_auth(auth: &auth::Auth<FileStorage>, command: AuthCommands) -> anyhow::Result<()> {
    match command {
        AuthCommands::Login { email, password } => {
            let password = password_or_prompt(password, "Senha")?;
            let user = auth.login(&email, &password).await?;
            println!("✔ Bem-vindo, {} ({})", user.name, user.role);
        }
        AuthCommands::Register { name, email, role, password } => {
            let password = password_or_prompt(password, "Senha")?;
            let user = auth.register(&name, &email, &password, role).await?;
            println!("✔ Conta criada: {} ({})", user.email, user.role);
        }
        AuthCommands::Logout => {
            auth.logout()?;
            println!("✔ Sessão encerrada");
        }
        AuthCommands::Whoami => match auth.current()? {
            Some(session) => {
                println!("{} <{}>", session.user.name, session.user.email);
                println!("  Perfil: {}", session.user.role);
                println!("  Avatar: {}", session.user.avatar_url);
            }
            None => println!("{}", BimTrackError::NotAuthenticated),
        },
        AuthCommands::ChangePassword => {
            let current = Password::new().with_prompt("Senha atual").interact()?;
            let new = Password::new().with_prompt("Nova senha").interact()?;
            let confirm = Password::new().with_prompt("Confirme a nova senha").interact()?;
            let message = auth.change_password(&current, &new, &confirm).await?;
            println!("✔ {}", message);
        }
        AuthCommands::UpdateAccount { name, email } => {
            let message = auth.update_account(&name, &email).await?;
            println!("✔ {}", message);
        }
    }
    Ok(())
}

fn password_or_prompt(password: Option<String>, prompt: &str) -> anyhow::Result<String> {
    match password {
        Some(p) => Ok(p),
        None => Ok(Password::new().with_prompt(prompt).interact()?),
    }
}

fn find_project(store: &Store, id: &str) -> error::Result<Project> {
    store
        .get_by_id(id)?
        .ok_or_else(|| BimTrackError::ProjectNotFound(id.to_string()))
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} ({elapsed})") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

fn report_outcome(outcome: analyzer::AnalysisOutcome) {
    match outcome {
        analyzer::AnalysisOutcome::Saved { summary, rows } => {
            println!(
                "✔ {} dias | {} de {} itens OK | divergências: {}",
                rows, summary.ok_items, summary.total_items, summary.divergences
            );
            println!("\n✅ Progresso: {}%", summary.progress_percent.round());
        }
        analyzer::AnalysisOutcome::Empty => {
            println!("⚠ A análise terminou, mas não retornou resultados. Nada foi gravado.");
        }
    }
}

fn print_project(project: &Project) {
    println!("🏗  {} [{}]", project.name, project.id);
    println!("  Cliente: {}", project.client);
    println!("  Status: {}", project.status.label());
    println!("  Progresso: {}%", project.progress);
    println!("  Alertas: {}", project.alerts_count);
    if let Some(date) = project.last_analysis_date {
        println!(
            "  Última análise: {}",
            date.with_timezone(&Local).format("%d/%m/%Y %H:%M")
        );
    }

    let rows = project.rows();
    if rows.is_empty() {
        println!("\nSem análise registrada.");
        return;
    }

    println!("\n{}", ComparisonTable::build(rows).render_text());
    println!("\n{}", TextSummary::build(rows).render());
}
