//! The landing page: hero, about, recent posts, contact.

use leptos::prelude::*;

use crate::components::{blog_grid::BlogGrid, nav_bar::NavBar, site_footer::SiteFooter};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <header class="header">
            <NavBar/>
        </header>
        <main>
            <section id="home" class="hero">
                <h1>"Building things for the web"</h1>
                <p>"Notes, projects, and experiments."</p>
                <a href="#blog" class="button">"Read the blog"</a>
            </section>
            <section id="about" class="about">
                <h2>"About"</h2>
                <p>"A small site with a rotating colour scheme and a feed of recent writing."</p>
            </section>
            <section id="blog" class="blog">
                <h2>"Recent Posts"</h2>
                <BlogGrid/>
            </section>
            <section id="contact" class="contact">
                <h2>"Contact"</h2>
                <p>"Say hello any time."</p>
            </section>
        </main>
        <SiteFooter/>
    }
}
