//! Marketing copy for the landing page. Data only, no logic; the
//! components decide how each list is rendered.

pub const DOWNLOAD_URL: &str = "https://linktr.ee/AplicativoTrampay?utm_source=qr_code";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/trampayapp?igsh=MXN5ZTB2em0yejdoYQ==";
pub const INSTAGRAM_HANDLE: &str = "@trampayapp";
pub const CONTACT_EMAIL: &str = "trampayapp@gmail.com";

pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { id: "inicio", label: "Inicio" },
    NavLink { id: "sobre", label: "Sobre" },
    NavLink { id: "contato", label: "Contato" },
    NavLink { id: "duvidas", label: "Duvidas" },
];

pub struct FeatureSlide {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURE_SLIDES: &[FeatureSlide] = &[
    FeatureSlide {
        icon: "📅",
        title: "Agendamento Inteligente",
        description: "Organize seus atendimentos com um calendario intuitivo. Receba lembretes automaticos e nunca mais perca um compromisso.",
    },
    FeatureSlide {
        icon: "📈",
        title: "Fluxo de Caixa",
        description: "Acompanhe suas entradas e saidas em tempo real. Visualize graficos detalhados do seu desempenho financeiro.",
    },
    FeatureSlide {
        icon: "👥",
        title: "Gestao de Clientes",
        description: "Mantenha um cadastro completo dos seus clientes. Acesse historico de servicos e preferencias rapidamente.",
    },
    FeatureSlide {
        icon: "⚡",
        title: "Precificacao Automatica",
        description: "Calcule o preco ideal para seus servicos considerando custos, tempo e margem de lucro desejada.",
    },
    FeatureSlide {
        icon: "📱",
        title: "Modo Offline",
        description: "Use o aplicativo mesmo sem internet. Seus dados sao sincronizados automaticamente quando voce reconectar.",
    },
];

pub struct ResearchCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const RESEARCH_CARDS: &[ResearchCard] = &[
    ResearchCard {
        icon: "👥",
        title: "Demanda Validada:",
        description: "pesquisa com 179 participantes demonstrou alta aceitacao da proposta.",
    },
    ResearchCard {
        icon: "📈",
        title: "Mercado Carente:",
        description: "aplicativos concorrentes sao caros, complexos e voltados a grandes empresas.",
    },
    ResearchCard {
        icon: "🛡",
        title: "Modelo Rentavel:",
        description: "o modelo freemium e acessivel e garante retorno financeiro.",
    },
    ResearchCard {
        icon: "⚡",
        title: "Solucao Viavel:",
        description: "o app pode ser desenvolvido com tecnologias simples e de baixo custo.",
    },
];

pub struct Plan {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Gratuito",
        description: "Plano gratuito com acesso limitado as funcionalidades do aplicativo",
        price: "R$00,00",
        features: &[
            "Fluxo de Caixa",
            "Notificacoes Basicas",
            "Agendamento e Gerenciamento de Negocios",
            "Modo Offline",
            "Gerenciamento de Equipe",
        ],
        highlighted: false,
    },
    Plan {
        name: "Freemium",
        description: "Com uma assinatura unica, tenha acesso ilimitado ao nosso aplicativo",
        price: "R$24,90",
        features: &[
            "Precificacao Automatica",
            "Assistente de IA",
            "Conversor de Moedas Internacionais",
            "Simulador de taxas e tarifas",
        ],
        highlighted: true,
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub rating: usize,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Founder of Borcelle",
        title: "Incrivel!",
        text: "O Trampay revolucionou a forma como gerencio meu pequeno negocio. Agora tenho controle total das minhas financas.",
        rating: 5,
    },
    Testimonial {
        name: "CEO at Borcelle",
        title: "Me salvou!",
        text: "Finalmente um aplicativo que entende as necessidades de quem trabalha por conta propria. Simples e eficiente!",
        rating: 5,
    },
    Testimonial {
        name: "CFO at Borcelle",
        title: "Muito util!",
        text: "A precificacao automatica me ajudou a cobrar o valor justo pelos meus servicos. Recomendo demais!",
        rating: 5,
    },
    Testimonial {
        name: "Autonomo",
        title: "Excelente!",
        text: "Uso o Trampay todo dia para organizar meus atendimentos. A agenda integrada e fantastica.",
        rating: 5,
    },
    Testimonial {
        name: "Microempreendedor",
        title: "Perfeito!",
        text: "O melhor investimento que fiz para meu negocio. O plano freemium vale cada centavo.",
        rating: 5,
    },
];

pub struct AboutCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ABOUT_CARDS: &[AboutCard] = &[
    AboutCard {
        icon: "🎯",
        title: "Nossa Missao",
        description: "Fornecer ferramentas simples e eficazes de gestao financeira para autonomos e microempreendedores, incentivando organizacao e crescimento sustentavel.",
    },
    AboutCard {
        icon: "👁",
        title: "Nossa Visao",
        description: "Ser referencia nacional no apoio a trabalhadores do setor informal, impulsionando a formalizacao, a educacao financeira e a prosperidade dos usuarios.",
    },
    AboutCard {
        icon: "💛",
        title: "Nossos Valores",
        description: "Autonomia, inclusao, inovacao, acessibilidade e impacto social.",
    },
];

pub const HISTORY_PARAGRAPHS: &[&str] = &[
    "O Trampay surgiu a partir da percepcao de que muitos profissionais autonomos enfrentam dificuldades para organizar seus ganhos e servicos. A partir disso, desenvolvemos uma solucao pratica, criada com base em pesquisas e validada com mais de 170 participantes.",
    "A desorganizacao financeira e uma das principais causas de endividamento entre microempreendedores e trabalhadores autonomos no Brasil, uma vez que muitos enfrentam dificuldade para manter o controle de ganhos, gastos e precificacao dos servicos. Diante disso, o Trampay foi desenvolvido como um aplicativo mobile voltado a gestao e organizacao financeira, alem de auxilio e suporte pratico a esses profissionais.",
];

pub struct Differential {
    pub label: &'static str,
    pub description: &'static str,
}

pub const DIFFERENTIALS: &[Differential] = &[
    Differential { label: "Acessivel", description: "pensado para todos os bolsos." },
    Differential { label: "Focado", description: "feito para autonomos e microempreendedores." },
    Differential { label: "Escalavel", description: "tecnologia que cresce junto com o usuario." },
    Differential { label: "Confiavel", description: "dados seguros e controle total." },
    Differential { label: "Eficiente", description: "organizacao pratica e rapida." },
    Differential { label: "Simples", description: "facil de usar, sem complicacoes." },
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "1. O que e o Trampay?",
        answer: "O Trampay e um aplicativo de gestao financeira desenvolvido especialmente para autonomos e microempreendedores. Ele oferece ferramentas simples e intuitivas para controle de ganhos, despesas, agendamento de servicos e precificacao.",
    },
    FaqEntry {
        question: "2. O Trampay e gratuito?",
        answer: "Sim! O Trampay oferece um plano gratuito com funcionalidades essenciais. Para recursos avancados como IA, precificacao automatica e conversor de moedas, temos o plano Freemium por R$24,90.",
    },
    FaqEntry {
        question: "3. Preciso ter CNPJ para usar o Trampay?",
        answer: "Nao! O Trampay foi desenvolvido pensando em todos os tipos de trabalhadores autonomos, formalizados ou nao. Voce pode usar o app independentemente de ter CNPJ.",
    },
    FaqEntry {
        question: "4. Quais sao as principais funcionalidades do aplicativo?",
        answer: "O Trampay oferece fluxo de caixa, agendamento de servicos, gestao de clientes, precificacao automatica, conversor de moedas, assistente de IA, notificacoes e muito mais.",
    },
    FaqEntry {
        question: "5. Meus dados ficam seguros no app?",
        answer: "Sim! Utilizamos criptografia de ponta e seguimos a LGPD (Lei Geral de Protecao de Dados) para garantir a seguranca e privacidade de todas as suas informacoes.",
    },
    FaqEntry {
        question: "6. O Trampay e compativel com quais dispositivos?",
        answer: "O app esta disponivel para Android e iOS, podendo ser baixado gratuitamente na Google Play e App Store.",
    },
];
