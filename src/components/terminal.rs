use yew::prelude::*;

use crate::content::Prompt;

#[derive(Properties, PartialEq)]
pub struct PromptLineProps {
    pub prompt: Prompt,
    pub command: AttrValue,
}

/// `user@host:path$ command`
#[function_component(PromptLine)]
pub fn prompt_line(props: &PromptLineProps) -> Html {
    let Prompt { user, host, path } = &props.prompt;

    html! {
        <div class="prompt-line">
            <span class="prompt-gold">{user.clone()}</span>
            <span class="prompt-muted">{"@"}</span>
            <span class="prompt-gold">{host.clone()}</span>
            <span class="prompt-muted">{":"}</span>
            <span class="prompt-muted">{path.clone()}</span>
            <span class="prompt-muted">{"$"}</span>
            <span class="prompt-command">{props.command.clone()}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TerminalCardProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TerminalCard)]
pub fn terminal_card(props: &TerminalCardProps) -> Html {
    html! {
        <div class={classes!("terminal-card", props.class.clone())}>
            {
                if let Some(title) = &props.title {
                    html! {
                        <div class="terminal-card-header">
                            <div class="terminal-card-title">{title.clone()}</div>
                            <div class="terminal-card-lights" aria-hidden="true">
                                <span class="light light-strong"></span>
                                <span class="light light-mid"></span>
                                <span class="light light-faint"></span>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            { for props.children.iter() }
        </div>
    }
}

#[function_component(Divider)]
pub fn divider() -> Html {
    html! { <div class="terminal-divider" aria-hidden="true"></div> }
}

#[derive(Properties, PartialEq)]
pub struct ChipProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Chip)]
pub fn chip(props: &ChipProps) -> Html {
    html! {
        <span class={classes!("chip", props.class.clone())}>{props.label.clone()}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    pub prompt: Prompt,
    pub command: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub lead: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// A navigable page section. The inner block is marked for reveal-on-scroll.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id.clone()} class="page-section">
            <div class="reveal">
                <PromptLine prompt={props.prompt.clone()} command={props.command.clone()} />
                <h2 class="section-title">{props.title.clone()}</h2>
                {
                    match &props.lead {
                        Some(lead) => html! { <p class="section-lead">{lead.clone()}</p> },
                        None => html! {},
                    }
                }
                <div class="section-body">
                    { for props.children.iter() }
                </div>
            </div>
            <Divider />
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use yew::ServerRenderer;

    use super::*;

    fn prompt() -> Prompt {
        Prompt {
            user: "sarmarzan".to_string(),
            host: "temple".to_string(),
            path: "~".to_string(),
        }
    }

    #[function_component(UntitledCard)]
    fn untitled_card() -> Html {
        html! {
            <TerminalCard>
                <p>{"body only"}</p>
            </TerminalCard>
        }
    }

    #[function_component(TitledCard)]
    fn titled_card() -> Html {
        html! {
            <TerminalCard title="status">
                <p>{"body"}</p>
            </TerminalCard>
        }
    }

    #[function_component(LeadlessSection)]
    fn leadless_section() -> Html {
        html! {
            <Section id="quiet" prompt={prompt()} command="ls" title="Quiet">
                <p>{"content"}</p>
            </Section>
        }
    }

    #[function_component(LeadSection)]
    fn lead_section() -> Html {
        html! {
            <Section id="loud" prompt={prompt()} command="ls" title="Loud" lead="with a lead">
                <p>{"content"}</p>
            </Section>
        }
    }

    async fn render<C>() -> String
    where
        C: BaseComponent,
        C::Properties: Default + Send,
    {
        ServerRenderer::<C>::new().hydratable(false).render().await
    }

    #[tokio::test]
    async fn card_without_title_skips_header() {
        let html = render::<UntitledCard>().await;

        assert!(html.contains("terminal-card"));
        assert!(html.contains("body only"));
        assert!(!html.contains("terminal-card-header"));
    }

    #[tokio::test]
    async fn card_with_title_renders_header() {
        let html = render::<TitledCard>().await;

        assert!(html.contains("terminal-card-header"));
        assert!(html.contains("status"));
    }

    #[tokio::test]
    async fn section_without_lead_skips_lead_paragraph() {
        let html = render::<LeadlessSection>().await;

        assert!(html.contains("id=\"quiet\""));
        assert!(html.contains("reveal"));
        assert!(!html.contains("section-lead"));
    }

    #[tokio::test]
    async fn section_with_lead_renders_it() {
        let html = render::<LeadSection>().await;

        assert!(html.contains("section-lead"));
        assert!(html.contains("with a lead"));
        assert!(html.contains("sarmarzan"));
    }
}
