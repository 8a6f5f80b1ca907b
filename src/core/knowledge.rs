//! Static keyword dictionary behind the awareness chat.
//!
//! Order matters: the responder returns the first keyword found in the
//! message, so greetings are checked before topics.

/// One keyword and the canned answer it triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub keyword: &'static str,
    pub answer: &'static str,
}

/// Answer used when no keyword matches
pub const FALLBACK_ANSWER: &str =
    "🤔 Je ne suis pas sûre de comprendre votre question. Essayez de me demander des informations sur :\n• Les symptômes\n• La prévention\n• L'auto-examen\n• Le dépistage\n• Les facteurs de risque\n• Octobre Rose\n\nOu tapez 'aide' pour voir toutes mes fonctionnalités ! 💕";

/// Prefix of the answer sent back when a chat request cannot be read
pub const ERROR_ANSWER_PREFIX: &str = "😔 Désolée, j'ai rencontré une erreur : ";

/// Answer sent back when a chat request cannot be read
pub fn error_answer(detail: &str) -> String {
    format!("{}{}", ERROR_ANSWER_PREFIX, detail)
}

const SYMPTOMS: &str =
    "🔍 Les symptômes du cancer du sein peuvent inclure :\n• Une bosse dans le sein ou l'aisselle\n• Changement de taille ou forme du sein\n• Écoulement du mamelon\n• Changement de la peau (rougeur, capitonnage)\n• Douleur persistante\n• Rétraction du mamelon\n• Peau d'orange\n\n⚠️ Consultez un médecin si vous remarquez ces signes.";

const CAUSES: &str =
    "🧬 Les causes du cancer du sein sont multiples :\n• Facteurs génétiques (5-10% des cas)\n• Hormones (œstrogènes, progestérone)\n• Âge (80% après 50 ans)\n• Antécédents familiaux\n• Mode de vie (alcool, tabac, sédentarité)\n• Radiations\n• Traitement hormonal substitutif\n\n💡 La plupart des cancers surviennent sans cause identifiable.";

const PREVENTION: &str =
    "🛡️ Pour prévenir le cancer du sein :\n• Maintenez un poids santé (IMC < 25)\n• Faites 150min d'exercice/semaine\n• Limitez l'alcool (max 1 verre/jour)\n• Évitez le tabac\n• Allaitez si possible (6+ mois)\n• Alimentation riche en fruits/légumes\n• Faites des auto-examens mensuels\n• Suivez les recommandations de dépistage";

const EXERCISE: &str =
    "🏃‍♀️ Activité physique :\n• Réduit le risque de 20-30%\n• 150min d'activité modérée/semaine\n• Ou 75min d'activité intense/semaine\n• Marche rapide, natation, vélo\n• Renforce le système immunitaire\n• Régule les hormones\n\n💪 Commencez progressivement !";

const SCREENING: &str =
    "🏥 Recommandations de dépistage :\n• Auto-examen mensuel dès 20 ans\n• Examen clinique annuel dès 25 ans\n• Mammographie tous les 2 ans de 50-74 ans\n• IRM si haut risque génétique\n• Échographie complémentaire si seins denses\n\n📅 Parlez-en à votre médecin !";

const HELP: &str =
    "🤖 Je peux vous aider avec :\n• Symptômes et signes d'alerte\n• Causes et facteurs de risque\n• Prévention et mode de vie\n• Dépistage et examens\n• Auto-examen des seins\n• Traitements disponibles\n• Statistiques et pronostic\n• Octobre Rose\n\n💬 Tapez simplement votre question !";

/// Keyword dictionary, scanned in order
pub static KNOWLEDGE_BASE: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        keyword: "bonjour",
        answer: "🎗️ Bonjour ! Je suis Rosa, votre assistante IA spécialisée dans la prévention du cancer du sein. Comment puis-je vous aider aujourd'hui ?",
    },
    KnowledgeEntry {
        keyword: "salut",
        answer: "🎗️ Salut ! Je suis Rosa, votre assistante pour Octobre Rose. Posez-moi vos questions sur le cancer du sein !",
    },
    KnowledgeEntry {
        keyword: "hello",
        answer: "🎗️ Hello ! I'm Rosa, your breast cancer awareness AI assistant. How can I help you today?",
    },
    KnowledgeEntry {
        keyword: "bonsoir",
        answer: "🌙 Bonsoir ! Je suis Rosa, disponible 24h/7j pour répondre à vos questions sur le cancer du sein.",
    },
    KnowledgeEntry {
        keyword: "hi",
        answer: "👋 Hi ! Je suis Rosa, votre guide pour la prévention du cancer du sein. Que voulez-vous savoir ?",
    },
    KnowledgeEntry {
        keyword: "symptômes",
        answer: SYMPTOMS,
    },
    KnowledgeEntry {
        keyword: "symptome",
        answer: SYMPTOMS,
    },
    KnowledgeEntry {
        keyword: "bosse",
        answer: "🔍 Une bosse peut être :\n• Dure et fixe (plus préoccupant)\n• Mobile et souple (souvent bénigne)\n• Douloureuse ou indolore\n\n⚠️ Toute nouvelle bosse doit être examinée par un médecin, même si elle semble bénigne.",
    },
    KnowledgeEntry {
        keyword: "douleur",
        answer: "💔 La douleur mammaire :\n• N'est PAS toujours un signe de cancer\n• Peut être liée au cycle hormonal\n• Doit être évaluée si persistante\n• Accompagnée d'autres symptômes = consultation urgente",
    },
    KnowledgeEntry {
        keyword: "causes",
        answer: CAUSES,
    },
    KnowledgeEntry {
        keyword: "cause",
        answer: CAUSES,
    },
    KnowledgeEntry {
        keyword: "génétique",
        answer: "🧬 Facteurs génétiques :\n• Mutations BRCA1 et BRCA2 (risque 50-85%)\n• Syndrome de Li-Fraumeni\n• Mutation du gène TP53\n• Antécédents familiaux directs\n\n🔬 Test génétique recommandé si :\n• Plusieurs cas familiaux\n• Cancer avant 40 ans\n• Cancer bilatéral",
    },
    KnowledgeEntry {
        keyword: "brca",
        answer: "🧬 Mutations BRCA1/BRCA2 :\n• BRCA1 : 55-65% de risque de cancer du sein\n• BRCA2 : 45% de risque de cancer du sein\n• Aussi risque de cancer ovarien\n• Hérédité autosomique dominante\n\n💡 Options : surveillance renforcée ou chirurgie préventive",
    },
    KnowledgeEntry {
        keyword: "hormones",
        answer: "🌸 Impact hormonal :\n• Œstrogènes : stimulent certains cancers\n• Règles précoces (avant 12 ans)\n• Ménopause tardive (après 55 ans)\n• Nulliparité (pas d'enfants)\n• Premier enfant après 30 ans\n• Traitement hormonal substitutif\n\n⚖️ L'allaitement est protecteur !",
    },
    KnowledgeEntry {
        keyword: "alcool",
        answer: "🍷 Alcool et cancer du sein :\n• Augmente le risque de 7% par verre/jour\n• Métabolisme de l'alcool produit des toxines\n• Augmente les œstrogènes\n• Réduit l'absorption de folates\n\n🚫 Recommandation : maximum 1 verre/jour pour les femmes",
    },
    KnowledgeEntry {
        keyword: "tabac",
        answer: "🚬 Tabac et cancer du sein :\n• Risque augmenté de 10-20%\n• Particulièrement avant la première grossesse\n• Tabagisme passif aussi dangereux\n• Retarde la guérison après traitement\n\n🚭 Arrêter à tout âge est bénéfique !",
    },
    KnowledgeEntry {
        keyword: "prévention",
        answer: PREVENTION,
    },
    KnowledgeEntry {
        keyword: "prevention",
        answer: PREVENTION,
    },
    KnowledgeEntry {
        keyword: "alimentation",
        answer: "🥗 Alimentation protectrice :\n• Fruits et légumes (5 portions/jour)\n• Poissons gras (oméga-3)\n• Légumineuses et céréales complètes\n• Thé vert (antioxydants)\n• Curcuma et brocolis\n\n❌ Limitez :\n• Viandes rouges et charcuteries\n• Graisses saturées\n• Sucres raffinés\n• Aliments ultra-transformés",
    },
    KnowledgeEntry {
        keyword: "exercice",
        answer: EXERCISE,
    },
    KnowledgeEntry {
        keyword: "sport",
        answer: EXERCISE,
    },
    KnowledgeEntry {
        keyword: "dépistage",
        answer: SCREENING,
    },
    KnowledgeEntry {
        keyword: "depistage",
        answer: SCREENING,
    },
    KnowledgeEntry {
        keyword: "mammographie",
        answer: "📸 La mammographie :\n• Examen de référence après 50 ans\n• Détecte 85-90% des cancers\n• Rayons X faible dose\n• Peut être inconfortable mais rapide\n• Permet de détecter des lésions de 2-3mm\n\n⏰ Durée : 10-15 minutes",
    },
    KnowledgeEntry {
        keyword: "irm",
        answer: "🧲 IRM mammaire :\n• Réservée aux femmes à haut risque\n• Très sensible (détecte 95% des cancers)\n• Pas de rayons X\n• Nécessite injection de produit de contraste\n• Examen long (30-45 min)\n\n💡 Complément de la mammographie",
    },
    KnowledgeEntry {
        keyword: "auto-examen",
        answer: "🤲 Auto-examen des seins :\n1. Devant un miroir, bras le long du corps\n2. Bras levés, observez les changements\n3. Allongée, palpez avec la pulpe des doigts\n4. Mouvements circulaires de l'extérieur vers le mamelon\n5. Vérifiez aussi les aisselles et clavicules\n6. Pressez délicatement le mamelon\n\n📅 À faire chaque mois, 7 jours après les règles",
    },
    KnowledgeEntry {
        keyword: "palpation",
        answer: "✋ Technique de palpation :\n• Utilisez la pulpe des 3 doigts du milieu\n• Mouvements circulaires, pression variable\n• Couvrez tout le sein (jusqu'aux côtes)\n• 3 niveaux de pression : léger, moyen, ferme\n• N'oubliez pas les aisselles\n\n🎯 Cherchez : bosses, épaississements, zones dures",
    },
    KnowledgeEntry {
        keyword: "facteurs de risque",
        answer: "⚠️ Facteurs de risque :\n• Âge (risque augmente avec l'âge)\n• Antécédents familiaux (mère, sœur)\n• Mutations génétiques (BRCA1, BRCA2)\n• Antécédents personnels de cancer\n• Densité mammaire élevée\n• Exposition aux radiations\n• Facteurs hormonaux\n\n💡 80% des femmes avec un cancer du sein n'ont aucun facteur de risque familial !",
    },
    KnowledgeEntry {
        keyword: "age",
        answer: "👵 Âge et cancer du sein :\n• 80% des cas après 50 ans\n• Risque double tous les 10 ans\n• Pic d'incidence : 65-70 ans\n• Possible à tout âge (même rare avant 30 ans)\n\n📈 Âge = facteur de risque principal",
    },
    KnowledgeEntry {
        keyword: "famille",
        answer: "👨‍👩‍👧‍👦 Antécédents familiaux :\n• Mère ou sœur : risque x2\n• Plusieurs parentes : risque x3-4\n• Cancer avant 50 ans : plus préoccupant\n• Côté paternel aussi important\n• Cancer de l'ovaire dans la famille\n\n🧬 Pensez au conseil génétique si nécessaire",
    },
    KnowledgeEntry {
        keyword: "traitement",
        answer: "💊 Traitements du cancer du sein :\n• Chirurgie (tumorectomie, mastectomie)\n• Chimiothérapie\n• Radiothérapie\n• Hormonothérapie\n• Thérapies ciblées (Herceptin)\n• Immunothérapie\n\n🎯 Traitement personnalisé selon le type de cancer",
    },
    KnowledgeEntry {
        keyword: "chirurgie",
        answer: "🏥 Chirurgie du cancer du sein :\n• Tumorectomie : conservation du sein\n• Mastectomie : ablation totale\n• Ganglion sentinelle\n• Curage axillaire si nécessaire\n• Reconstruction possible\n\n💡 85% des femmes peuvent conserver leur sein",
    },
    KnowledgeEntry {
        keyword: "octobre rose",
        answer: "🎗️ Octobre Rose est le mois de sensibilisation au cancer du sein !\n• Campagne mondiale de prévention\n• Encourager le dépistage précoce\n• Soutenir la recherche\n• Accompagner les patientes\n• Monuments illuminés en rose\n• Courses et événements solidaires\n\n💪 Ensemble, luttons contre le cancer du sein !",
    },
    KnowledgeEntry {
        keyword: "statistiques",
        answer: "📊 Statistiques importantes :\n• 1 femme sur 8 développera un cancer du sein\n• 59,000 nouveaux cas/an en France\n• 2ème cancer le plus fréquent chez la femme\n• Détecté tôt : 99% de survie à 5 ans\n• 87% de survie globale à 5 ans\n• Âge moyen au diagnostic : 63 ans\n\n🎯 Le dépistage précoce sauve des vies !",
    },
    KnowledgeEntry {
        keyword: "survie",
        answer: "💪 Taux de survie :\n• Stade 0-1 : 99% à 5 ans\n• Stade 2 : 93% à 5 ans\n• Stade 3 : 72% à 5 ans\n• Tous stades confondus : 87% à 5 ans\n\n🎯 Diagnostic précoce = meilleur pronostic !",
    },
    KnowledgeEntry {
        keyword: "aide",
        answer: HELP,
    },
    KnowledgeEntry {
        keyword: "help",
        answer: HELP,
    },
    KnowledgeEntry {
        keyword: "merci",
        answer: "🌸 De rien ! Je suis là pour vous accompagner dans votre démarche de prévention. N'hésitez pas à me poser d'autres questions !",
    },
    KnowledgeEntry {
        keyword: "thank you",
        answer: "🌸 You're welcome! I'm here to support your breast cancer prevention journey. Feel free to ask more questions!",
    },
    KnowledgeEntry {
        keyword: "au revoir",
        answer: "👋 Au revoir ! Prenez soin de vous et n'oubliez pas : la prévention est votre meilleure alliée ! 🎗️",
    },
    KnowledgeEntry {
        keyword: "bye",
        answer: "👋 Goodbye! Take care and remember: prevention is your best ally! 🎗️",
    },
    KnowledgeEntry {
        keyword: "à bientôt",
        answer: "👋 À bientôt ! N'hésitez pas à revenir me voir pour toute question sur la prévention du cancer du sein ! 🎗️",
    },
];
