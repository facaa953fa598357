use samp_query_domain::{ClientRecord, DetailedClientRecord, RuleMap, ServerInfo, ServerStatus};
use serde::Serialize;
use std::fmt::Write;

fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn info(info: &ServerInfo, json: bool) -> anyhow::Result<String> {
    if json {
        return to_json(info);
    }
    Ok(render_info(info))
}

pub fn rules(rules: &RuleMap, json: bool) -> anyhow::Result<String> {
    if json {
        return to_json(rules);
    }
    Ok(render_rules(rules))
}

pub fn clients(clients: &[ClientRecord], json: bool) -> anyhow::Result<String> {
    if json {
        return to_json(clients);
    }

    let mut out = format!("{:<24} {:>8}", "Nickname", "Score");
    for client in clients {
        let _ = write!(out, "\n{:<24} {:>8}", client.nickname, client.score);
    }
    Ok(out)
}

pub fn detailed_clients(clients: &[DetailedClientRecord], json: bool) -> anyhow::Result<String> {
    if json {
        return to_json(clients);
    }
    Ok(render_detailed(clients))
}

pub fn ping(millis: u64, json: bool) -> anyhow::Result<String> {
    if json {
        return to_json(&serde_json::json!({ "ping_ms": millis }));
    }
    Ok(format!("{} ms", millis))
}

pub fn status(status: &ServerStatus, json: bool) -> anyhow::Result<String> {
    if json {
        return to_json(status);
    }

    let mut out = render_info(&status.info);
    out.push_str("\n\n");
    out.push_str(&render_rules(&status.rules));
    if !status.clients.is_empty() {
        out.push_str("\n\n");
        out.push_str(&render_detailed(&status.clients));
    }
    Ok(out)
}

fn render_info(info: &ServerInfo) -> String {
    format!(
        "Hostname: {}\nGamemode: {}\nLanguage: {}\nPlayers:  {}/{}\nPassword: {}",
        info.hostname,
        info.gamemode,
        info.language,
        info.players,
        info.max_players,
        if info.passworded { "yes" } else { "no" }
    )
}

fn render_rules(rules: &RuleMap) -> String {
    let width = rules.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    rules
        .iter()
        .map(|(name, value)| format!("{name:<width$} = {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_detailed(clients: &[DetailedClientRecord]) -> String {
    let mut out = format!("{:>3} {:<24} {:>8} {:>6}", "ID", "Nickname", "Score", "Ping");
    for client in clients {
        let _ = write!(
            out,
            "\n{:>3} {:<24} {:>8} {:>6}",
            client.id, client.nickname, client.score, client.ping
        );
    }
    out
}
