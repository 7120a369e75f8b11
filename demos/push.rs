use gotify_push::{Error, PushArgs, default_locations, push, read_config};

const URL: &str = "http://127.0.0.1:8080";
const TOKEN: &str = "AQnvT2yPh9sCpgd";

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = read_config(&default_locations());

    let args = PushArgs {
        args: vec!["Backup".to_string(), "finished\\nall".to_string(), "good".to_string()],
        title: "Nightly".to_string(),
        priority: Some(5),
        token: TOKEN.to_string(),
        url: URL.to_string(),
        content_type: "text/markdown".to_string(),
        ..Default::default()
    };

    let request = args.resolve("", &config)?;
    match push(&request).await {
        Ok(created) => println!("Created message {} for application {}", created.id, created.appid),
        Err(error) => println!("Error sending message: {}", error),
    }

    Ok(())
}
