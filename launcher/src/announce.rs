use std::fmt::Write;

pub fn service_url(host: &str, port: u16) -> String {
    format!("http://{}:{}", host, port)
}

pub fn banner(url: &str) -> String {
    // These lines are the product of this tool, read on the dev machine while
    // typing the URL into a headset. They go to plain stdout, not the log.
    let mut out = String::new();

    let _ = writeln!(out, "🚀 Lancement du serveur WebXR VR...");
    let _ = writeln!(out);
    let _ = writeln!(out, "✅ Serveur disponible à: {}", url);
    let _ = writeln!(out);
    let _ = writeln!(out, "📱 Sur ton casque VR ou autre appareil, ouvre:");
    let _ = writeln!(out, "   {}", url);
    let _ = writeln!(out);
    let _ = writeln!(out, "⏹️  Appuie sur Ctrl+C pour arrêter le serveur");
    let _ = writeln!(out);

    out
}

pub fn farewell() -> String {
    // The leading blank lines clear the ^C the terminal echoes.
    "\n\n👋 Serveur arrêté".to_string()
}
