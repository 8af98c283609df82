//! Built-in defaults used when a slot is absent or malformed, plus the
//! session-open seed content for metrics and the activity feed.

use super::types::{
    ActivityItem, ActivityTone, AutomationPlay, PerformanceMetric, PlayStatus, WorkflowStage,
};

pub fn default_stages() -> Vec<WorkflowStage> {
    vec![
        WorkflowStage {
            id: "stage-hook-lab".to_string(),
            title: "Hook Lab".to_string(),
            persona: "Energetic futurist MC with meme literacy".to_string(),
            objective: "Spin raw transcripts into scroll-stopping openings tuned for short-form attention spans.".to_string(),
            content_focus: "Lead with bold predictions, spike curiosity, and promise a specific transformation in <7 seconds.".to_string(),
            ai_prompt: "Rewrite the core insight as 3 viral hook lines. Blend futurist tone with pop-culture references that make tech breakthroughs feel personal.".to_string(),
            deliverables: vec![
                "3 viral hook lines".to_string(),
                "1 thumb-stopping caption".to_string(),
                "Trend-aligned emoji pack".to_string(),
            ],
            duration_minutes: 18,
            confidence: 88,
        },
        WorkflowStage {
            id: "stage-story-forge".to_string(),
            title: "Story Forge".to_string(),
            persona: "Charismatic AI bestie with receipts".to_string(),
            objective: "Structure the narrative arc around transformation, evidence, and a crisp CTA that loops to community.".to_string(),
            content_focus: "Thread tension by revealing the 'before', narrate the shift, then anchor with proof-of-work signals.".to_string(),
            ai_prompt: "Draft a 3-act script: hook, proof, CTA. Use plain language with vivid imagery. Pull in community metrics and personal wins to humanize the tech.".to_string(),
            deliverables: vec![
                "Expandable script blueprint".to_string(),
                "Quote carousel slices".to_string(),
                "CTA variations for different platforms".to_string(),
            ],
            duration_minutes: 24,
            confidence: 82,
        },
        WorkflowStage {
            id: "stage-syndication".to_string(),
            title: "Syndication Matrix".to_string(),
            persona: "Ops-minded campaign producer".to_string(),
            objective: "Atomize the hero story into channel-native assets with scheduling and cross-promotional hooks.".to_string(),
            content_focus: "Match asset tone to each network, tag collaborations, and queue reminder loops for partner amplification.".to_string(),
            ai_prompt: "Create a cross-channel delivery plan: IG Reels, TikTok, YouTube Shorts, LinkedIn carousel, newsletter teaser.".to_string(),
            deliverables: vec![
                "Channel-ready copy deck".to_string(),
                "Post-production checklist".to_string(),
                "Auto-generated outreach DMs".to_string(),
            ],
            duration_minutes: 32,
            confidence: 90,
        },
    ]
}

pub fn default_automations() -> Vec<AutomationPlay> {
    vec![
        AutomationPlay {
            id: "auto-repurpose".to_string(),
            name: "Sizzle Sync".to_string(),
            trigger: "Podcast episode published".to_string(),
            action: "Clip top 90 seconds using highlight detection, layer AI voiceover, push to TikTok + Reels drafts.".to_string(),
            channel: "Short-form video".to_string(),
            cadence: "Within 2h of the drop".to_string(),
            tools: vec![
                "Descript AI".to_string(),
                "CapCut API".to_string(),
                "Meta Creative Kit".to_string(),
            ],
            status: PlayStatus::Scheduled,
            last_run: Some("Yesterday 19:20".to_string()),
            next_run: Some("Today 20:10".to_string()),
        },
        AutomationPlay {
            id: "auto-engage".to_string(),
            name: "Community Loop".to_string(),
            trigger: "Comment velocity > 25 per hour".to_string(),
            action: "Spin responsive threads and pin top comment, DM high-signal fans with invite to private Discord drop.".to_string(),
            channel: "Audience activation".to_string(),
            cadence: "Active during launch windows".to_string(),
            tools: vec![
                "LangChain agent".to_string(),
                "OpenAI Realtime".to_string(),
                "Typefully".to_string(),
            ],
            status: PlayStatus::Idle,
            last_run: Some("Mon 09:00".to_string()),
            next_run: Some("Awaiting trigger".to_string()),
        },
    ]
}

pub fn default_metrics() -> Vec<PerformanceMetric> {
    vec![
        PerformanceMetric {
            label: "Content velocity".to_string(),
            value: "14 assets / wk".to_string(),
            change: 26,
            helper_text: "vs last sprint".to_string(),
        },
        PerformanceMetric {
            label: "Audience resonance".to_string(),
            value: "6.3% avg watch-through".to_string(),
            change: 12,
            helper_text: "Top decile for niche".to_string(),
        },
        PerformanceMetric {
            label: "Conversion pipeline".to_string(),
            value: "38 warm leads".to_string(),
            change: 8,
            helper_text: "Triggered from DM flows".to_string(),
        },
        PerformanceMetric {
            label: "Ops savings".to_string(),
            value: "11.5 hrs / wk".to_string(),
            change: 33,
            helper_text: "Manual editing replaced".to_string(),
        },
    ]
}

pub fn seed_activity() -> Vec<ActivityItem> {
    vec![
        ActivityItem {
            id: "log-001".to_string(),
            title: "Sizzle Sync clipped a micro teaser".to_string(),
            detail: "Published to TikTok and queued to Instagram Reels.".to_string(),
            timestamp: "Today · 11:40".to_string(),
            tone: ActivityTone::Positive,
        },
        ActivityItem {
            id: "log-002".to_string(),
            title: "Community Loop paused".to_string(),
            detail: "Awaiting fresh comments surge before re-arming DM funnel.".to_string(),
            timestamp: "Today · 09:05".to_string(),
            tone: ActivityTone::Neutral,
        },
        ActivityItem {
            id: "log-003".to_string(),
            title: "Story Forge flagged CTA fatigue".to_string(),
            detail: "Suggested swapping CTA to promote Discord premiere.".to_string(),
            timestamp: "Yesterday · 21:10".to_string(),
            tone: ActivityTone::Alert,
        },
    ]
}
