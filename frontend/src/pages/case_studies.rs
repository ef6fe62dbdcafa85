use yew::prelude::*;

use crate::components::page::use_page;
use crate::content::{CaseStudy, CASE_STUDIES};

#[derive(Properties, PartialEq)]
struct CaseStudyCardProps {
    study: CaseStudy,
}

#[function_component(CaseStudyCard)]
fn case_study_card(props: &CaseStudyCardProps) -> Html {
    let study = &props.study;
    html! {
        <article class="case-study">
            <span class="card-tag">{study.industry}</span>
            <h2>{study.client}</h2>
            <h3>{"The problem"}</h3>
            <p>{study.challenge}</p>
            <h3>{"The result"}</h3>
            <p>{study.outcome}</p>
            <div class="stack-tags">
                { for study.stack.iter().map(|tech| html! { <span class="stack-tag">{*tech}</span> }) }
            </div>
        </article>
    }
}

#[function_component(CaseStudies)]
pub fn case_studies() -> Html {
    use_page("Case Studies");

    html! {
        <div class="content-page">
            <section class="page-hero">
                <h1>{"Case studies"}</h1>
                <p>{"A few of the systems we built and still look after."}</p>
            </section>
            <section class="feature-block">
                { for CASE_STUDIES.iter().map(|study| html! {
                    <CaseStudyCard key={study.client} study={*study} />
                }) }
            </section>
            <style>
                {r#"
                .case-study {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 2rem;
                    margin-bottom: 2rem;
                }
                .case-study h3 {
                    color: #7EB2FF;
                    font-size: 1rem;
                    margin: 1rem 0 0.25rem;
                }
                .stack-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }
                .stack-tag {
                    border: 1px solid rgba(126, 178, 255, 0.4);
                    border-radius: 999px;
                    padding: 0.2rem 0.8rem;
                    font-size: 0.85rem;
                    color: #7EB2FF;
                }
                "#}
            </style>
        </div>
    }
}
