use dacctl::Dacctl;
use snafu::Whatever;

#[tokio::main]
#[snafu::report]
async fn main() -> Result<(), Whatever> {
    Dacctl::run().await
}
