use chrono::Datelike;
use log::error;
use yew::prelude::*;

use crate::components::terminal::{Chip, Divider, PromptLine, Section, TerminalCard};
use crate::content::{
    CertificationGroup, ContactLink, HobbyEntry, Portfolio, Project, Prompt, SkillCategory,
};
use crate::effects::hooks::{use_parallax, use_reveal_on_scroll};

const NAV_LINKS: [&str; 7] = [
    "about",
    "skills",
    "certifications",
    "projects",
    "hobbies",
    "mission",
    "contact",
];

#[function_component(PortfolioTerminal)]
pub fn portfolio_terminal() -> Html {
    let content = use_state(|| match Portfolio::embedded() {
        Ok(portfolio) => Ok(portfolio),
        Err(err) => {
            error!("Failed to load portfolio content: {}", err);
            Err(err.to_string())
        }
    });
    let root = use_node_ref();
    use_reveal_on_scroll(root.clone());

    html! {
        <div class="terminal-page" ref={root}>
            <Backdrop />
            <Header />
            <main class="terminal-main">
                {
                    match &*content {
                        Ok(portfolio) => render_sections(portfolio),
                        Err(message) => html! {
                            <TerminalCard title="error">
                                <p class="card-text">{"portfolio content could not be loaded"}</p>
                                <pre class="card-error">{message.clone()}</pre>
                            </TerminalCard>
                        },
                    }
                }
                <Footer />
            </main>
            <style>{PAGE_STYLES}</style>
        </div>
    }
}

fn render_sections(portfolio: &Portfolio) -> Html {
    let prompt = portfolio.prompt.clone();

    html! {
        <>
            <Hero prompt={prompt.clone()} />

            <Section
                id="about"
                prompt={prompt.clone()}
                command="cat about.md"
                title="About Me"
                lead="I know a little bit of everything — not to look skilled, but to stay adaptable."
            >
                <div class="grid grid-2">
                    <TerminalCard title="story">
                        <p class="card-text">
                            {"I’m a young developer who moves calmly, learns quickly, and stays honest."}
                            <span class="muted">{" I’m not trying to become “just a developer.”"}</span>
                        </p>
                        <p class="card-text muted spaced">
                            {"My direction is entrepreneurship, leadership, and management — building systems that people trust."}
                        </p>
                    </TerminalCard>
                    <TerminalCard title="principles">
                        <ul class="principles">
                            <li><span class="gold">{">"}</span>{" Calm confidence — no noise, just results."}</li>
                            <li><span class="gold">{">"}</span>{" Humility — I stay a student."}</li>
                            <li><span class="gold">{">"}</span>{" Wisdom — decisions over reactions."}</li>
                            <li><span class="gold">{">"}</span>{" Integrity — truth is the foundation."}</li>
                        </ul>
                        <div class="quote-box">
                            <p class="mono">
                                {"“I don’t want to be rich or famous — I want to be known. Known for honesty, wisdom, and integrity.”"}
                            </p>
                        </div>
                    </TerminalCard>
                </div>
            </Section>

            <Section
                id="skills"
                prompt={prompt.clone()}
                command="ls skills/ --group-directories-first"
                title="Technical Skills"
                lead="A wide base, sharpened by curiosity and disciplined practice."
            >
                <SkillsGrid skills={portfolio.skills.clone()} />
            </Section>

            <Section
                id="certifications"
                prompt={prompt.clone()}
                command="cat certifications.json | jq"
                title="Certifications"
                lead="Proof of work matters — but character matters more."
            >
                <CertificationsGrid groups={portfolio.certifications.clone()} />
            </Section>

            <Section
                id="projects"
                prompt={prompt.clone()}
                command="ls projects/"
                title="Projects"
                lead="Placeholders for now — the real projects will be systems people can rely on."
            >
                <ProjectsGrid projects={portfolio.projects.clone()} />
            </Section>

            <Section
                id="hobbies"
                prompt={prompt.clone()}
                command="cat hobbies_and_philosophy.txt"
                title="Hobbies & Philosophy"
                lead="A person is built in their quiet hours."
            >
                <div class="grid grid-2">
                    <HobbiesCard hobbies={portfolio.hobbies.clone()} />
                    <TerminalCard title="reflection">
                        <p class="card-text">{"I like ideas that survive pressure."}</p>
                        <p class="card-text muted spaced">
                            {"I’m not interested in temporary hype — I’m interested in lasting value: truth, discipline, and calm progress."}
                        </p>
                        <div class="quote-box gold-box">
                            <p class="mono gold-soft">{"“Wisdom is not loud. It is consistent.”"}</p>
                        </div>
                    </TerminalCard>
                </div>
            </Section>

            <Section
                id="mission"
                prompt={prompt.clone()}
                command="cat mission.txt"
                title="Personal Mission"
                lead="I’m building a name that means something."
            >
                <TerminalCard title="values">
                    <div class="grid grid-3">
                        <Value name="honesty" text="I don’t negotiate with the truth. If I’m wrong, I learn." />
                        <Value name="leadership" text="I want to lead with calm responsibility, not ego." />
                        <Value name="integrity" text="I build systems that people can trust — even when no one is watching." />
                    </div>
                    <div class="final-line">
                        <div class="mono small muted">{"final_line"}</div>
                        <div class="mono large">{"“I don’t want to be rich or famous — I want to be known.”"}</div>
                        <div class="mono muted">{"Known for honesty, wisdom, and integrity."}</div>
                    </div>
                </TerminalCard>
            </Section>

            <Section
                id="contact"
                prompt={prompt}
                command="echo \"let's build something real\""
                title="Contact"
                lead="If my mindset matches what you’re building, send a signal."
            >
                <div class="grid grid-2">
                    <ContactCard links={portfolio.links.clone()} />
                    <TerminalCard title="closing">
                        <p class="card-text">{"“Calm is power. Wisdom is direction.”"}</p>
                        <p class="card-text muted spaced">
                            {"If you’re building something meaningful, I’ll bring discipline, honesty, and systems thinking."}
                        </p>
                        <div class="quote-box gold-box">
                            <div class="mono small muted">{"signature"}</div>
                            <div class="mono gold-soft">{"Sarmarzan Above All"}</div>
                        </div>
                    </TerminalCard>
                </div>
            </Section>
        </>
    }
}

/// Owns the parallax state so scrolling only re-renders the decorative layers.
#[function_component(Backdrop)]
fn backdrop() -> Html {
    let offsets = use_parallax();

    html! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop-grid-layer" style={format!("transform: {};", offsets.grid_transform())}>
                <div class="terminal-grid"></div>
            </div>
            <div class="terminal-orb orb-a" style={format!("transform: {};", offsets.orb_a_transform())}></div>
            <div class="terminal-orb orb-b" style={format!("transform: {};", offsets.orb_b_transform())}></div>
            <div class="terminal-scanlines"></div>
        </div>
    }
}

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="terminal-header">
            <div class="header-inner">
                <div class="brand">
                    <div class="brand-dot" aria-hidden="true"></div>
                    <div class="mono">
                        <span class="gold-soft">{"Sarmarzan"}</span>
                        <span class="muted">{" / "}</span>
                        <span class="muted">{"Erfan Ghasri Fard"}</span>
                    </div>
                </div>
                <nav class="header-nav">
                    {
                        NAV_LINKS.iter().map(|id| html! {
                            <a key={*id} class="terminal-link" href={format!("#{}", id)}>{*id}</a>
                        }).collect::<Html>()
                    }
                </nav>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    prompt: Prompt,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    html! {
        <section class="hero reveal">
            <PromptLine prompt={props.prompt.clone()} command="whoami" />
            <div class="hero-grid">
                <div>
                    <h1 class="hero-title">
                        {"Erfan Ghasri Fard"}
                        <span class="muted">{" — “Sarmarzan”"}</span>
                    </h1>
                    <p class="hero-tagline">
                        {"Calm. Humble. Driven. Honest."}
                        <span class="muted">{" ENTJ energy — but with a quiet mind."}</span>
                    </p>
                    <div class="brand-phrase">
                        <span class="mono small muted">{"brand_phrase"}</span>
                        <span class="mono small gold-soft">{"“Sarmarzan Above All”"}</span>
                        <span class="terminal-cursor" aria-hidden="true"></span>
                    </div>
                    <div class="hero-actions">
                        <a href="#contact" class="terminal-button primary">{"initiate contact"}</a>
                        <a href="#mission" class="terminal-button">{"read my mission"}</a>
                    </div>
                    <p class="hero-intro muted">
                        {"I’m 17, from Iran. I build, learn, and grow — but the real goal is leadership."}
                    </p>
                </div>

                <TerminalCard title="status" class={classes!("status-card")}>
                    <div class="status-row">
                        <div class="muted">{"role"}</div>
                        <div class="mono align-right">
                            {"young developer"}
                            <div class="muted">{"future entrepreneur / leader"}</div>
                        </div>
                    </div>
                    <div class="status-row">
                        <div class="muted">{"focus"}</div>
                        <div class="mono align-right">{"clarity → systems → impact"}</div>
                    </div>
                    <div class="quote-box gold-box">
                        <div class="mono small muted">{"small spiritual note"}</div>
                        <div class="mono gold-soft">{"“In stillness, the next decision becomes obvious.”"}</div>
                        <div class="small align-right faint-gold">{"بِسْمِ ٱللَّٰهِ"}</div>
                    </div>
                </TerminalCard>
            </div>
            <Divider />
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillsGridProps {
    skills: Vec<SkillCategory>,
}

#[function_component(SkillsGrid)]
fn skills_grid(props: &SkillsGridProps) -> Html {
    html! {
        <div class="grid grid-3">
            {
                props.skills.iter().map(|category| html! {
                    <TerminalCard key={category.title.clone()} title={category.title.clone()}>
                        <div class="chip-row">
                            {
                                category.items.iter().map(|item| html! {
                                    <Chip key={item.clone()} label={item.clone()} />
                                }).collect::<Html>()
                            }
                        </div>
                        {
                            match &category.note {
                                Some(note) => html! { <p class="card-note">{note.clone()}</p> },
                                None => html! {},
                            }
                        }
                    </TerminalCard>
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CertificationsGridProps {
    groups: Vec<CertificationGroup>,
}

#[function_component(CertificationsGrid)]
fn certifications_grid(props: &CertificationsGridProps) -> Html {
    html! {
        <div class="grid grid-3">
            {
                props.groups.iter().map(|group| html! {
                    <TerminalCard key={group.group.clone()} title={group.group.clone()}>
                        <ul class="credential-list">
                            {
                                group.items.iter().map(|item| html! {
                                    <li key={item.clone()}>
                                        <span class="bullet" aria-hidden="true"></span>
                                        <span>{item.clone()}</span>
                                    </li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </TerminalCard>
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectsGridProps {
    projects: Vec<Project>,
}

#[function_component(ProjectsGrid)]
fn projects_grid(props: &ProjectsGridProps) -> Html {
    html! {
        <div class="grid grid-3">
            {
                props.projects.iter().map(|project| html! {
                    <TerminalCard key={project.name.clone()} title={project.card_title()} class={classes!("project-card")}>
                        <p class="card-text muted small">{project.summary.clone()}</p>
                        {
                            if project.tags.is_empty() {
                                html! {}
                            } else {
                                html! {
                                    <div class="tag-row">
                                        {
                                            project.tags.iter().map(|tag| html! {
                                                <Chip key={tag.clone()} label={tag.clone()} class={classes!("tag")} />
                                            }).collect::<Html>()
                                        }
                                    </div>
                                }
                            }
                        }
                    </TerminalCard>
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HobbiesCardProps {
    hobbies: Vec<HobbyEntry>,
}

#[function_component(HobbiesCard)]
fn hobbies_card(props: &HobbiesCardProps) -> Html {
    html! {
        <TerminalCard title="interests">
            <ul class="hobby-list">
                {
                    props.hobbies.iter().map(|hobby| html! {
                        <li key={hobby.label.clone()}>
                            <span class="gold">{"•"}</span>
                            <span>{hobby.label.clone()}</span>
                        </li>
                    }).collect::<Html>()
                }
            </ul>
        </TerminalCard>
    }
}

#[derive(Properties, PartialEq)]
struct ContactCardProps {
    links: Vec<ContactLink>,
}

#[function_component(ContactCard)]
fn contact_card(props: &ContactCardProps) -> Html {
    html! {
        <TerminalCard title="message">
            <p class="card-text muted small">{"This is a static portfolio — but connection is simple."}</p>
            <p class="card-text muted small spaced">
                {"Add your real links later (GitHub, LinkedIn, email). For now, these are placeholders."}
            </p>
            <div class="link-row">
                {
                    props.links.iter().map(|link| html! {
                        <a key={link.label.clone()} href={link.href.clone()} class="terminal-link contact-link">
                            {link.label.clone()}
                        </a>
                    }).collect::<Html>()
                }
            </div>
        </TerminalCard>
    }
}

#[derive(Properties, PartialEq)]
struct ValueProps {
    name: AttrValue,
    text: AttrValue,
}

#[function_component(Value)]
fn value(props: &ValueProps) -> Html {
    html! {
        <div>
            <div class="mono gold-soft">{props.name.clone()}</div>
            <p class="card-text muted small">{props.text.clone()}</p>
        </div>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="terminal-footer reveal">
            <div class="footer-inner">
                <div>{format!("© {} Erfan Ghasri Fard — “Sarmarzan”", year)}</div>
                <div class="faint-gold">{"built like a terminal • kept like a temple"}</div>
            </div>
        </footer>
    }
}

const PAGE_STYLES: &str = r#"
.terminal-page {
    --terminal-bg: #060608;
    --terminal-panel: rgba(12, 12, 15, 0.78);
    --terminal-line: rgba(216, 183, 106, 0.16);
    --terminal-text: #e9e4d8;
    --terminal-muted: #9a9387;
    --terminal-gold: #d8b76a;
    --terminal-gold-soft: #ecd9a8;
    position: relative;
    min-height: 100vh;
    overflow-x: hidden;
    background: var(--terminal-bg);
    color: var(--terminal-text);
    font-family: ui-sans-serif, system-ui, sans-serif;
}
html { scroll-behavior: smooth; }
.mono, .prompt-line, .terminal-card-title, .chip, .credential-list {
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
}
.muted { color: var(--terminal-muted); }
.gold { color: var(--terminal-gold); }
.gold-soft { color: var(--terminal-gold-soft); }
.faint-gold { color: rgba(216, 183, 106, 0.55); }
.small { font-size: 0.8rem; }
.large { font-size: 1.125rem; margin-top: 0.75rem; }
.align-right { text-align: right; }
.spaced { margin-top: 1rem; }

.backdrop {
    pointer-events: none;
    position: absolute;
    inset: 0;
    overflow: hidden;
}
.backdrop-grid-layer {
    position: absolute;
    inset: -20%;
    opacity: 0.6;
}
.terminal-grid {
    position: absolute;
    inset: 0;
    background-image:
        linear-gradient(rgba(216, 183, 106, 0.05) 1px, transparent 1px),
        linear-gradient(90deg, rgba(216, 183, 106, 0.05) 1px, transparent 1px);
    background-size: 48px 48px;
}
.terminal-orb {
    position: absolute;
    border-radius: 9999px;
    background: radial-gradient(circle, rgba(216, 183, 106, 0.18), transparent 65%);
    filter: blur(8px);
    will-change: transform;
}
.orb-a { top: -10rem; left: 50%; width: 540px; height: 540px; }
.orb-b { bottom: -14rem; right: -120px; width: 520px; height: 520px; opacity: 0.7; }
.terminal-scanlines {
    position: absolute;
    inset: 0;
    background: repeating-linear-gradient(0deg, rgba(0, 0, 0, 0.18) 0 1px, transparent 1px 3px);
    opacity: 0.35;
}

.terminal-header {
    position: sticky;
    top: 0;
    z-index: 20;
    border-bottom: 1px solid var(--terminal-line);
    background: rgba(6, 6, 8, 0.72);
    backdrop-filter: blur(8px);
}
.header-inner {
    margin: 0 auto;
    max-width: 72rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1.5rem;
    padding: 1rem 1.5rem;
}
.brand { display: flex; align-items: center; gap: 0.75rem; font-size: 0.875rem; }
.brand-dot {
    width: 0.75rem;
    height: 0.75rem;
    border-radius: 9999px;
    background: var(--terminal-gold);
    box-shadow: 0 0 18px rgba(216, 183, 106, 0.45);
}
.header-nav {
    display: flex;
    flex: 1;
    justify-content: flex-end;
    gap: 1rem;
    max-width: 55vw;
    overflow-x: auto;
    white-space: nowrap;
    font-size: 0.875rem;
    scrollbar-width: none;
}
.terminal-link { color: var(--terminal-muted); text-decoration: none; transition: color 0.2s; }
.terminal-link:hover { color: var(--terminal-gold-soft); }

.terminal-main {
    position: relative;
    margin: 0 auto;
    max-width: 72rem;
    padding: 4rem 1.5rem 7rem;
}
.page-section { scroll-margin-top: 7rem; }
.prompt-line {
    display: flex;
    flex-wrap: wrap;
    align-items: baseline;
    gap: 0.25rem 0.5rem;
    font-size: 0.875rem;
}
.prompt-gold { color: var(--terminal-gold); }
.prompt-muted { color: var(--terminal-muted); }
.prompt-command { color: var(--terminal-text); }
.section-title {
    margin-top: 1rem;
    font-family: ui-monospace, monospace;
    font-size: 1.5rem;
    color: var(--terminal-gold-soft);
}
.section-lead { margin-top: 0.75rem; max-width: 48rem; color: var(--terminal-muted); }
.section-body { margin-top: 1.5rem; }
.terminal-divider {
    margin: 2.5rem 0;
    height: 1px;
    background: linear-gradient(90deg, transparent, rgba(216, 183, 106, 0.5), transparent);
}

.grid { display: grid; gap: 1.5rem; }
@media (min-width: 1024px) {
    .grid-2 { grid-template-columns: repeat(2, 1fr); }
    .grid-3 { grid-template-columns: repeat(3, 1fr); }
    .hero-grid { grid-template-columns: 1.2fr 0.8fr; }
}

.terminal-card {
    position: relative;
    overflow: hidden;
    border-radius: 1rem;
    border: 1px solid var(--terminal-line);
    background: var(--terminal-panel);
    padding: 1.5rem;
}
.terminal-card-header {
    margin-bottom: 1rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
}
.terminal-card-title { font-size: 0.875rem; color: var(--terminal-muted); }
.terminal-card-lights { display: flex; gap: 0.5rem; }
.light { width: 0.5rem; height: 0.5rem; border-radius: 9999px; }
.light-strong { background: rgba(216, 183, 106, 0.55); }
.light-mid { background: rgba(216, 183, 106, 0.25); }
.light-faint { background: rgba(216, 183, 106, 0.12); }
.card-text { line-height: 1.6; }
.card-note { margin-top: 1rem; font-size: 0.875rem; color: var(--terminal-muted); }
.card-error { white-space: pre-wrap; color: var(--terminal-gold-soft); }

.chip-row, .tag-row, .link-row { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.tag-row, .link-row { margin-top: 1rem; }
.chip {
    border-radius: 9999px;
    border: 1px solid rgba(216, 183, 106, 0.22);
    background: rgba(216, 183, 106, 0.06);
    padding: 0.25rem 0.75rem;
    font-size: 0.75rem;
    color: var(--terminal-gold-soft);
}
.chip.tag {
    border-radius: 0.5rem;
    border-color: var(--terminal-line);
    background: rgba(8, 8, 10, 0.32);
    font-size: 11px;
    color: var(--terminal-muted);
}
.credential-list, .hobby-list, .principles { list-style: none; padding: 0; margin: 0; }
.credential-list li { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 0.5rem; }
.hobby-list li { display: flex; gap: 0.75rem; margin-bottom: 0.75rem; color: var(--terminal-muted); }
.principles li { margin-bottom: 0.75rem; color: var(--terminal-muted); }
.bullet {
    width: 0.375rem;
    height: 0.375rem;
    border-radius: 9999px;
    background: rgba(216, 183, 106, 0.55);
}
.quote-box {
    margin-top: 1.25rem;
    border-radius: 0.75rem;
    border: 1px solid rgba(216, 183, 106, 0.25);
    background: rgba(8, 8, 10, 0.32);
    padding: 1rem;
}
.gold-box { background: rgba(216, 183, 106, 0.05); }
.final-line {
    margin-top: 2rem;
    border-radius: 1rem;
    border: 1px solid rgba(216, 183, 106, 0.28);
    background: rgba(8, 8, 10, 0.38);
    padding: 1.5rem;
}
.contact-link {
    border-radius: 0.75rem;
    border: 1px solid var(--terminal-line);
    background: rgba(8, 8, 10, 0.32);
    padding: 0.5rem 1rem;
    font-family: ui-monospace, monospace;
    font-size: 0.875rem;
}

.hero-grid { margin-top: 2rem; display: grid; gap: 2.5rem; align-items: start; }
.hero-title {
    font-family: ui-monospace, monospace;
    font-size: 2.5rem;
    line-height: 1.2;
    color: var(--terminal-gold-soft);
}
.hero-tagline { margin-top: 1.25rem; font-size: 1.125rem; }
.hero-intro { margin-top: 2.5rem; max-width: 42rem; }
.brand-phrase {
    margin-top: 1.5rem;
    display: inline-flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 0.75rem;
    border-radius: 1rem;
    border: 1px solid var(--terminal-line);
    background: rgba(8, 8, 10, 0.52);
    padding: 0.75rem 1rem;
}
.terminal-cursor {
    display: inline-block;
    width: 0.55rem;
    height: 1rem;
    background: var(--terminal-gold);
    animation: cursor-blink 1.1s steps(1) infinite;
}
@keyframes cursor-blink { 50% { opacity: 0; } }
.hero-actions { margin-top: 2rem; display: flex; flex-wrap: wrap; gap: 0.75rem; }
.terminal-button {
    display: inline-flex;
    border-radius: 0.75rem;
    border: 1px solid var(--terminal-line);
    background: rgba(8, 8, 10, 0.38);
    padding: 0.75rem 1.25rem;
    font-family: ui-monospace, monospace;
    font-size: 0.875rem;
    color: var(--terminal-muted);
    text-decoration: none;
    transition: background 0.2s, color 0.2s;
}
.terminal-button.primary {
    border-color: rgba(216, 183, 106, 0.45);
    background: rgba(216, 183, 106, 0.08);
    color: var(--terminal-gold-soft);
}
.terminal-button:hover { color: var(--terminal-gold-soft); background: rgba(216, 183, 106, 0.12); }
.status-row { display: flex; justify-content: space-between; gap: 1rem; margin-bottom: 1rem; font-size: 0.875rem; }

.terminal-footer { margin-top: 1rem; }
.footer-inner {
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    gap: 1rem;
    border-top: 1px solid var(--terminal-line);
    padding-top: 2.5rem;
    font-family: ui-monospace, monospace;
    font-size: 0.75rem;
    color: var(--terminal-muted);
}

.reveal {
    opacity: 0;
    transform: translateY(18px);
    transition: opacity 0.7s ease, transform 0.7s ease;
}
.reveal.is-visible { opacity: 1; transform: none; }
@media (prefers-reduced-motion: reduce) {
    .reveal { transition: none; }
    .terminal-cursor { animation: none; }
}
"#;

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::time::Duration;

    use gloo_timers::future::sleep;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    use super::*;
    use crate::config::REVEALED_CLASS;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn mount() -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<PortfolioTerminal>::with_root(root.clone()).render();
        sleep(Duration::from_millis(50)).await;
        root
    }

    fn texts(root: &Element, selector: &str) -> Vec<String> {
        let nodes = root.query_selector_all(selector).unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .map(|node| node.text_content().unwrap_or_default())
            .collect()
    }

    #[wasm_bindgen_test]
    async fn renders_one_card_per_entry_in_order() {
        let root = mount().await;
        let portfolio = Portfolio::embedded().unwrap();

        let skill_titles: Vec<String> = portfolio.skills.iter().map(|s| s.title.clone()).collect();
        assert_eq!(texts(&root, "#skills .terminal-card-title"), skill_titles);

        let project_titles: Vec<String> = portfolio.projects.iter().map(Project::card_title).collect();
        assert_eq!(texts(&root, "#projects .terminal-card-title"), project_titles);

        assert_eq!(
            texts(&root, "#certifications .terminal-card").len(),
            portfolio.certifications.len()
        );
        assert_eq!(texts(&root, "#hobbies .hobby-list li").len(), portfolio.hobbies.len());
    }

    #[wasm_bindgen_test]
    async fn optional_fields_render_only_when_present() {
        let root = mount().await;
        let portfolio = Portfolio::embedded().unwrap();

        let notes: Vec<String> = portfolio.skills.iter().filter_map(|s| s.note.clone()).collect();
        assert_eq!(texts(&root, "#skills .card-note"), notes);

        let tagged = portfolio.projects.iter().filter(|p| !p.tags.is_empty()).count();
        assert_eq!(texts(&root, "#projects .tag-row").len(), tagged);
    }

    #[wasm_bindgen_test]
    async fn marks_every_section_for_reveal() {
        let root = mount().await;

        // hero, seven sections, footer
        assert_eq!(root.query_selector_all(".reveal").unwrap().length(), 9);
    }

    #[wasm_bindgen_test]
    async fn hero_in_view_is_revealed_by_the_browser_observer() {
        let root = mount().await;
        sleep(Duration::from_millis(250)).await;

        let hero = root.query_selector(".hero").unwrap().unwrap();
        assert!(hero.class_list().contains(REVEALED_CLASS));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod render_tests {
    use yew::ServerRenderer;

    use super::*;
    use crate::content::ProjectStatus;

    #[function_component(BareProject)]
    fn bare_project() -> Html {
        let projects = vec![Project {
            name: "Bare".to_string(),
            summary: "no extras".to_string(),
            tags: Vec::new(),
            status: None,
        }];
        html! { <ProjectsGrid projects={projects} /> }
    }

    #[function_component(TaggedProject)]
    fn tagged_project() -> Html {
        let projects = vec![Project {
            name: "Wisdom Notes".to_string(),
            summary: String::new(),
            tags: vec!["Writing".to_string(), "Systems".to_string()],
            status: Some(ProjectStatus::Building),
        }];
        html! { <ProjectsGrid projects={projects} /> }
    }

    async fn render<C>() -> String
    where
        C: BaseComponent,
        C::Properties: Default + Send,
    {
        ServerRenderer::<C>::new().hydratable(false).render().await
    }

    #[tokio::test]
    async fn tagless_project_has_no_tag_row_and_generic_title() {
        let html = render::<BareProject>().await;

        assert!(html.contains("Project · Bare"));
        assert!(!html.contains("tag-row"));
        assert!(html.contains("no extras"));
    }

    #[tokio::test]
    async fn tagged_project_renders_each_tag_in_order() {
        let html = render::<TaggedProject>().await;

        assert!(html.contains("Building · Wisdom Notes"));
        assert_eq!(html.matches("tag-row").count(), 1);
        let writing = html.find("Writing").unwrap();
        let systems = html.find("Systems").unwrap();
        assert!(writing < systems);
    }

    #[tokio::test]
    async fn backdrop_starts_at_rest() {
        let html = render::<Backdrop>().await;

        assert_eq!(html.matches("translate3d(0, 0px, 0)").count(), 3);
        assert!(html.contains("translateX(-50%)"));
    }
}
