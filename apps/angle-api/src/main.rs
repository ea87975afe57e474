use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = angle_api::Args::parse();
	angle_api::run(args).await
}
