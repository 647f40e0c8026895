//! Canned portfolio content, written in [`crate::core::markup`]

pub const OWNER: &str = "Jacopo Vendramin";

pub const HELP: &str = "\
[title]Available commands:[/]

  • [cmd]help[/] - Show this help message
  • [cmd]about[/] - Learn about me
  • [cmd]skills[/] - View my technical skills
  • [cmd]experience[/] - My work experience
  • [cmd]contact[/] - Get in touch
  • [cmd]ls[/] - List files
  • [cmd]cat [file][/] - Read a file
  • [cmd]whoami[/] - Display current user
  • [cmd]theme[/] - Change color theme
  • [cmd]clear[/] - Clear terminal

[hl]Try some hidden commands! Type random things and see what happens... 🕵️[/]";

pub const ABOUT: &str = "\
[title]👋 About Me[/]

Hey! I'm [hl]Jacopo Vendramin[/], a pragmatic software engineer who loves building
scalable, cloud-native systems that actually work.

I don't box myself into \"frontend\" or \"backend\". I'm a [hl]Software Engineer[/],
applying engineering principles across the entire stack. From requirement analysis and system
design to implementation and maintenance, I thrive in all phases of the development lifecycle.

[accent]🛠️ What I work with:[/]
  • Cloud platforms (AWS), Node.js, Python
  • API design and automation workflows
  • DevOps culture and agile collaboration

[accent]💡 My philosophy:[/]
Technology is a tool, not an end. Code is like language: important, but what really matters
is [hl]having something meaningful to say[/]. I focus on understanding what truly
matters and designing solutions that deliver real value.

Clean code, practical solutions, and building things that users actually need. That's what drives me.";

pub const SKILLS: &str = "\
[title]⚡ Technical Skills[/]
[tech](or: things I've googled enough times to be dangerous)[/]

[hl]Languages I can read without crying:[/]
• JavaScript/TypeScript - My daily driver (still looking up array methods)
• Python - When I need to automate my laziness
• Go - Fast code, slow learning curve
• Rust - The compiler is my therapist
• C++ - For when I need embedded nightmares

[hl]Frontend (aka making rectangles look pretty):[/]
• React, Vue, Svelte - Pick your poison
• Nuxt - SSR without the tears
• CSS - Still centering divs in 2026

[hl]Backend (aka the fun stuff):[/]
• Node.js, Deno, Bun - Because one runtime isn't enough
• NestJS, Express, Strapi - API factories
• REST, GraphQL - Arguing about which is better

[hl]Cloud & DevOps (aka someone else's computer):[/]
• AWS, GCP, Azure - Choose your cloud overlord
• Docker, Kubernetes - Container inception
• CI/CD - Breaking production faster

[hl]Databases (data hoarder edition):[/]
• PostgreSQL, MongoDB - SQL or NoSQL? Yes.
• Redis - When you need SPEED

[accent]💡 Real talk:[/] I believe in learning what's needed for the job, not collecting
tech stack Pokemon. Every tool has its place, and ego has none.";

pub const EXPERIENCE: &str = "\
[title]💼 Work Experience[/]

[hl]Back End Developer[/] @ Crispy Bacon | Digital Company
[tech]February 2024 - Present[/]

[hl]Software Developer[/] @ VMA INNOVA
[tech]January 2018 - Present[/]
• Python automation: scripts for text file management and processing
• Embedded development: Arduino and bare-metal C++ projects
• Focus on performance, efficiency, and direct hardware control

[hl]Co-Founder | Full Stack Engineer[/] @ MAINDOLAB Srl
[tech]January 2021 - February 2024[/]
• Requirements gathering and presales with clients and stakeholders
• Full-stack development: Vue.js, Nuxt, Strapi, NestJS, Express
• Deployment and infrastructure: on-premises and cloud with Docker

[hl]Full Stack Engineer[/] @ WSB Srl
[tech]September 2020 - January 2021[/]

[hl]Frontend Developer[/] @ Athesys Srl
[tech]September 2019 - August 2020[/]

[hl]Web Developer Internship[/] @ Develon Digital
[tech]June 2018 - September 2018[/]";

pub const HONORS: &str = "\
[title]🏆 Honors & Awards[/]

[hl]IBM University Team Challenge[/] - IBM Prize Winner
[tech]November 2018 | University of Birmingham[/]
Won IBM prize (out of 25 teams) for creating a Bomberman-inspired game.
Developed main menu, sound component, and achievements system.

[hl]IT Innovation Challenge[/] - Birmingham-Dubai Digital Wall
[tech]November 2018 | University of Birmingham[/]
Designed interactive stories-based cross-platform application using UML.
Project selected for development by the University IT Innovation Centre.

[hl]Hackference 2017[/] - 1st Microsoft Prize
[tech]October 2017 | Microsoft[/]
\"Sirio Home Bot\" - Best implementation of Microsoft Bot Framework and Cognitive Services.

[hl]Hackference 2016[/] - 1st Microsoft Prize
[tech]October 2016 | Microsoft[/]
Autonomous RC car using Microsoft Cognitive Vision API with collision detection
and vision recognition capabilities.";

pub const CONTACT: &str = "\
[title]📬 Get In Touch[/]

  • [hl]GitHub:[/] [link=https://github.com/JacopoVendramin]github.com/JacopoVendramin[/]
  • [hl]Email:[/] [link=mailto:vendraminjacopo@gmail.com]vendraminjacopo@gmail.com[/]
  • [hl]LinkedIn:[/] [link=https://www.linkedin.com/in/vendraminjacopo/]linkedin.com/in/vendraminjacopo[/]

[ok]💬 Always open to interesting projects and collaborations![/]";

pub const README: &str = "\
[title]📖 Jacopo Vendramin's Interactive Portfolio[/]

Welcome to my terminal-based portfolio! This isn't just a website, it's an experience.

[hl]Quick Start:[/]
  • Type [cmd]help[/] to see all commands
  • Use [cmd]Tab[/] for autocomplete
  • Use [cmd]↑/↓[/] arrows for command history
  • Try hidden commands (hint: try tech-related words!)

[hl]Features:[/]
  • ✨ Interactive command-line interface
  • 🎨 Multiple color themes
  • ⚡ Real-time command execution
  • 🎯 Easter eggs and hidden commands

[hl]About This Site:[/]
Built without frameworks, just plain code.
Because sometimes the best tool is knowing when you don't need one.

[ok]Enjoy exploring! 🚀[/]";

pub const SUDO_RESPONSES: [&str; 3] = [
    "Nice try! But you're not in the sudoers file. This incident will be reported. 😏",
    "sudo: You have been logged. The authorities have been notified.",
    "With great power comes great responsibility... which you don't have here. 🦸",
];

pub const HACK: &str = "\
[ok]Initializing hack sequence...[/]
Bypassing firewall... ███████████ 100%
Decrypting mainframe... ███████████ 100%
Accessing root directory... ███████████ 100%

[err]Just kidding! 😄 Nice try though.[/]
Want to close the terminal? Try [hl]Ctrl+W[/]... 😉";

pub const MATRIX: &str = "\
[ok]Entering the Matrix...[/]

[hl]Red pill or blue pill?[/]
Actually, just use the [cmd]theme[/] command for Matrix mode! 🕶️";

pub const COFFEE_ART: &str = r"           )  (
          (   ) )
           ) ( (
         _______)_
      .-'---------|
     ( C|/\/\/\/\/|
      '-./\/\/\/\/|
        '_________'
           '----'";

pub const COFFEE: &str = "\
[ok]☕ Behold! The potion of eternityyyyyyy...[/]

[err]Oh no, wait... it's just coffee. ☕[/]";
