use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Exact Hold'em equity by board enumeration", long_about = None)]
pub struct Args {
    /// Two-card hands, e.g. `AsKs QdQh`
    pub hands: Vec<String>,
    /// Known community cards, zero to five, e.g. `2h7hTc`
    #[arg(short, long, default_value = "")]
    pub board: String,
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
