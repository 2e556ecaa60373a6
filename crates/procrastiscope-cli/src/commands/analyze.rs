//! Analysis commands: decode a payload, run the engine, print JSON.

use procrastiscope_core::{
    decode_payload, AnalysisRequest, AnalysisService, Config, EngineContext, JournalEntry,
    Pattern, Task,
};

use super::{Output, PayloadArgs};

fn service(config: &Config) -> AnalysisService {
    AnalysisService::new(EngineContext::initialize(config))
}

pub fn run_full(
    config: &Config,
    payload: &PayloadArgs,
    explain: bool,
    output: &Output,
) -> Result<(), Box<dyn std::error::Error>> {
    let request: AnalysisRequest = decode_payload(&payload.read()?, "analysis request")?;
    let service = service(config);
    let analysis = if explain {
        service.analyze_with_breakdown(&request)
    } else {
        service.analyze(&request)
    };
    output.print(&analysis)
}

pub fn run_task(
    config: &Config,
    payload: &PayloadArgs,
    output: &Output,
) -> Result<(), Box<dyn std::error::Error>> {
    let task: Task = decode_payload(&payload.read()?, "task")?;
    output.print(&service(config).analyze_task(&task))
}

pub fn run_journal(
    config: &Config,
    payload: &PayloadArgs,
    output: &Output,
) -> Result<(), Box<dyn std::error::Error>> {
    let entry: JournalEntry = decode_payload(&payload.read()?, "journal entry")?;
    output.print(&service(config).analyze_journal(&entry))
}

pub fn run_recommend(
    config: &Config,
    payload: &PayloadArgs,
    output: &Output,
) -> Result<(), Box<dyn std::error::Error>> {
    let patterns: Vec<Pattern> = decode_payload(&payload.read()?, "pattern list")?;
    output.print(&service(config).recommend(&patterns))
}

pub fn run_status(config: &Config, output: &Output) -> Result<(), Box<dyn std::error::Error>> {
    output.print(&service(config).status())
}
