use clap::Parser;
use rtryon::logger::{self, LogLevel, LoggerConfig};
use rtryon::{
    encode, EncodedImage, GenerationOutcome, ImageRole, ImageSource, LocalFile, TryOnClient,
    TryOnConfig, TryOnError,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "rtryon", version, about = "Dress a person photo in a garment photo")]
struct Args {
    /// Photo of the person
    #[arg(long)]
    person: PathBuf,

    /// Photo of the clothing item
    #[arg(long)]
    outfit: PathBuf,

    /// Send the garment photo as is instead of asking the model to cut it out
    /// of its background first
    #[arg(long)]
    keep_background: bool,

    /// Where to write the generated image
    #[arg(long, short)]
    output: Option<PathBuf>,

    #[arg(long, short)]
    verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    json_logs: bool,

    /// Also append log lines to this file
    #[arg(long)]
    log_file: Option<String>,
}

impl Args {
    fn remove_background(&self) -> bool {
        !self.keep_background
    }

    fn logger_config(&self) -> LoggerConfig {
        let config = if self.json_logs {
            LoggerConfig::production()
        } else if self.verbose {
            LoggerConfig::development()
        } else {
            LoggerConfig::default()
        };
        let config = if self.verbose {
            config.with_level(LogLevel::Debug)
        } else {
            config
        };
        match &self.log_file {
            Some(path) => config.with_file_output(path),
            None => config,
        }
    }
}

async fn load(role: ImageRole, path: &Path) -> rtryon::Result<EncodedImage> {
    let file = LocalFile::open(path)
        .await
        .map_err(TryOnError::ReadFailed)?;
    log::info!(
        "📷 Loading {} image {} ({}, {} bytes)",
        role,
        path.display(),
        file.declared_type(),
        file.size()
    );
    encode(&file).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let env_loaded = dotenv::dotenv().is_ok();

    if let Err(e) = logger::init_with_config(args.logger_config()) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    if env_loaded {
        log::info!("✅ .env file loaded");
    } else {
        log::debug!("No .env file found, using process environment");
    }

    let config = match TryOnConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ {}", e);
            if e.is_fatal() {
                log::error!("💀 Cannot start without an API key; set API_KEY or GEMINI_API_KEY");
            }
            return ExitCode::FAILURE;
        }
    };
    logger::log_config_info(&config);

    let client = match TryOnClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("❌ Failed to initialize model client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let (person, outfit) = match tokio::try_join!(
        load(ImageRole::Person, &args.person),
        load(ImageRole::Outfit, &args.outfit)
    ) {
        Ok(images) => images,
        Err(e) => {
            log::error!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = client
        .generate_try_on(&person, &outfit, args.remove_background())
        .await;

    let image = match outcome {
        GenerationOutcome::Image(image) => image,
        failed => {
            log::error!("❌ {}", failed.message().unwrap_or_default());
            return ExitCode::FAILURE;
        }
    };

    let bytes = match image.decode() {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("❌ Failed to decode generated image: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let output = args.output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "tryon_{}.{}",
            chrono::Utc::now().timestamp(),
            image.file_extension()
        ))
    });

    if let Err(e) = tokio::fs::write(&output, &bytes).await {
        log::error!("❌ Failed to save image to {}: {}", output.display(), e);
        return ExitCode::FAILURE;
    }

    log::info!("💾 Image saved to: {}", output.display());
    println!("{}", output.display());
    ExitCode::SUCCESS
}
