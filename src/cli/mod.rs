use clap::Parser;
use std::net::SocketAddr;
use url::Url;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long)]
    #[arg(default_value = "https://maps.googleapis.com/maps/api/streetview")]
    pub street_view_url: Url,
    #[arg(long)]
    pub street_view_api_key: String,
}
