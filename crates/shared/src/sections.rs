// Section templates for generated articles, one per section kind and locale.

use crate::article::{ArticleContext, SectionKind};
use crate::catalog::{self, Competitors, PriceTiers};
use crate::links::LinkKind;
use crate::models::Locale;
use crate::research::{self, Citation, FaqPair, FeatureSet};

/// Render one section, or `None` when the section has nothing to show
pub fn render(kind: SectionKind, ctx: &ArticleContext<'_>) -> Option<String> {
    match kind {
        SectionKind::Tldr => Some(tldr(ctx)),
        SectionKind::Introduction => Some(introduction(ctx)),
        SectionKind::TableOfContents => table_of_contents(ctx),
        SectionKind::Pricing => ctx
            .research
            .and_then(|r| r.pricing)
            .map(|prices| pricing(ctx, &prices)),
        SectionKind::Features => ctx
            .research
            .and_then(|r| r.features.as_ref())
            .map(|features| features_section(ctx, features)),
        SectionKind::Implementation => Some(implementation(ctx)),
        SectionKind::Comparison => Some(comparison(ctx)),
        SectionKind::CaseStudy => Some(case_study(ctx)),
        SectionKind::Faq => Some(faq(ctx)),
        SectionKind::Conclusion => Some(conclusion(ctx)),
        SectionKind::Footnotes => Some(footnotes(ctx)),
    }
}

fn image_tag(src: &str, alt: &str) -> String {
    format!(
        "<Image src=\"{}\" alt=\"{}\" width={{800}} height={{450}} />",
        src, alt
    )
}

fn cta(ctx: &ArticleContext<'_>) -> String {
    format!("<AffiliateCTA product=\"{}\" />", ctx.product.cta_id())
}

fn tldr(ctx: &ArticleContext<'_>) -> String {
    match ctx.locale {
        Locale::Ja => format!(
            "{{/* TL;DR（3行以内） */}}\n\
             **{}のポイント：** 料金プラン、主要機能、導入メリットを3行で要約します。\
             コスト効率と実用性を重視した選択肢として注目されています。",
            ctx.title()
        ),
        Locale::En => format!(
            "{{/* TL;DR (3 lines max) */}}\n\
             **{} Key Points:** Pricing plans, key features, and implementation benefits \
             summarized in 3 lines. Highlighted as a cost-effective and practical choice.",
            ctx.title()
        ),
    }
}

/// Link to the cluster's pillar page, from the link plan or the pillar map
fn pillar_link(ctx: &ArticleContext<'_>) -> Option<String> {
    if let Some(link) = ctx.links.iter().find(|l| l.kind == LinkKind::Pillar) {
        return Some(link.markdown(ctx.locale));
    }

    let slug = catalog::pillar_slug(ctx.task);
    (!slug.is_empty()).then(|| format!("[{}](/{})", slug, slug))
}

fn introduction(ctx: &ArticleContext<'_>) -> String {
    let base = ctx.base_title();
    let category = catalog::service_category(ctx.task, ctx.locale);
    let cover = ctx.image("cover.webp");

    match ctx.locale {
        Locale::Ja => {
            let pillar = pillar_link(ctx)
                .map(|link| format!("詳しくは{}をご覧ください。", link))
                .unwrap_or_default();
            format!(
                "## {base}とは？\n\n\
                 {base}は、{category}の分野で注目されるサービスです。{pillar}\n\n\
                 {image}\n\n\
                 本記事では、{title}の料金体系、主要機能、導入手順について詳しく解説します。",
                base = base,
                category = category,
                pillar = pillar,
                image = image_tag(&cover, &format!("{}の概要画面", ctx.title())),
                title = ctx.title(),
            )
        }
        Locale::En => {
            let pillar = pillar_link(ctx)
                .map(|link| format!(" For more details, see {}.", link))
                .unwrap_or_default();
            format!(
                "## What is {base}?\n\n\
                 {base} is a notable service in the {category} field.{pillar}\n\n\
                 {image}\n\n\
                 This article provides detailed coverage of {title} pricing, key features, \
                 and implementation steps.",
                base = base,
                category = category,
                pillar = pillar,
                image = image_tag(&cover, &format!("{} overview interface", ctx.title())),
                title = ctx.title(),
            )
        }
    }
}

fn table_of_contents(ctx: &ArticleContext<'_>) -> Option<String> {
    if ctx.task.word_count_target() < 800 {
        return None;
    }

    Some(match ctx.locale {
        Locale::Ja => "{/* 目次 - mdx TOC プラグインが見出しを拾う */}".to_string(),
        Locale::En => "{/* Table of contents - picked up by the MDX TOC plugin */}".to_string(),
    })
}

fn pricing(ctx: &ArticleContext<'_>, prices: &PriceTiers) -> String {
    let c = ctx.product.currency();
    let image = ctx.image("image-1.webp");

    match ctx.locale {
        Locale::Ja => format!(
            "## 料金プラン詳細\n\n\
             {image}\n\n\
             {title}の料金体系は、利用規模と必要な機能に応じて選択できます。\n\n\
             | プラン | 月額料金 | 主な機能 | 推奨用途 |\n\
             |-------|---------|---------|---------|\n\
             | 基本 | {c}{basic} | 基本機能一式 | 小規模利用 |\n\
             | 標準 | {c}{standard} | 高度機能付き | 中規模利用 |\n\
             | 企業 | {c}{enterprise} | 全機能 + サポート | 大規模利用 |\n\n\
             {cta}\n\n\
             無料トライアルは{days}日間利用可能です。",
            image = image_tag(&image, &format!("{}の料金プラン比較表", ctx.title())),
            title = ctx.title(),
            c = c,
            basic = prices.basic,
            standard = prices.standard,
            enterprise = prices.enterprise,
            cta = cta(ctx),
            days = ctx.product.trial_days(),
        ),
        Locale::En => format!(
            "## Pricing Plans Details\n\n\
             {image}\n\n\
             {title} pricing is structured to match your usage scale and required features.\n\n\
             | Plan | Monthly | Key Features | Recommended For |\n\
             |------|---------|--------------|-----------------|\n\
             | Basic | {c}{basic} | Essential features | Small scale |\n\
             | Standard | {c}{standard} | Advanced features | Medium scale |\n\
             | Enterprise | {c}{enterprise} | All features + support | Large scale |\n\n\
             {cta}\n\n\
             Free trial is available for {days} days.",
            image = image_tag(&image, &format!("{} pricing comparison table", ctx.title())),
            title = ctx.title(),
            c = c,
            basic = prices.basic,
            standard = prices.standard,
            enterprise = prices.enterprise,
            cta = cta(ctx),
            days = ctx.product.trial_days(),
        ),
    }
}

fn features_section(ctx: &ArticleContext<'_>, features: &FeatureSet) -> String {
    let list = |items: &[research::Feature]| {
        items
            .iter()
            .map(|f| format!("- **{}**: {}", f.name.get(ctx.locale), f.detail.get(ctx.locale)))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let image = ctx.image("image-2.webp");

    match ctx.locale {
        Locale::Ja => format!(
            "## 主要機能と特徴\n\n\
             {image}\n\n\
             {title}の主要機能をご紹介します。\n\n\
             ### 基本機能\n{core}\n\n\
             ### 高度機能\n{advanced}\n\n\
             詳細な機能比較については[関連記事]も参考にしてください。",
            image = image_tag(&image, &format!("{}の機能画面", ctx.title())),
            title = ctx.title(),
            core = list(&features.core),
            advanced = list(&features.advanced),
        ),
        Locale::En => format!(
            "## Key Features & Benefits\n\n\
             {image}\n\n\
             Overview of {title} key features.\n\n\
             ### Core Features\n{core}\n\n\
             ### Advanced Features\n{advanced}\n\n\
             For detailed feature comparison, see [related article].",
            image = image_tag(&image, &format!("{} features interface", ctx.title())),
            title = ctx.title(),
            core = list(&features.core),
            advanced = list(&features.advanced),
        ),
    }
}

fn implementation(ctx: &ArticleContext<'_>) -> String {
    let image = ctx.image("image-3.webp");

    match ctx.locale {
        Locale::Ja => format!(
            "## 導入・設定手順\n\n\
             {title}の導入は以下の手順で進められます。\n\n\
             ### 1. 初期設定\n\
             - アカウント作成\n\
             - 基本情報登録\n\
             - プラン選択\n\n\
             ### 2. 設定・カスタマイズ\n\
             - 用途に応じた設定調整\n\
             - 必要な連携設定\n\
             - テスト環境での動作確認\n\n\
             ### 3. 本格運用\n\
             - 本番環境への適用\n\
             - 運用開始\n\
             - 効果測定・改善\n\n\
             {image}\n\n\
             詳細な設定方法については[設定ガイド]をご参照ください。",
            title = ctx.title(),
            image = image_tag(&image, &format!("{}の設定画面", ctx.title())),
        ),
        Locale::En => format!(
            "## Implementation Guide\n\n\
             {title} implementation follows these steps.\n\n\
             ### 1. Initial Setup\n\
             - Account creation\n\
             - Basic information registration\n\
             - Plan selection\n\n\
             ### 2. Configuration & Customization\n\
             - Adjust settings for your use case\n\
             - Configure necessary integrations\n\
             - Test in development environment\n\n\
             ### 3. Production Deployment\n\
             - Apply to production environment\n\
             - Start operation\n\
             - Monitor and optimize\n\n\
             {image}\n\n\
             For detailed configuration, see [setup guide].",
            title = ctx.title(),
            image = image_tag(&image, &format!("{} settings interface", ctx.title())),
        ),
    }
}

fn comparison(ctx: &ArticleContext<'_>) -> String {
    let competitors: Competitors = match ctx.research {
        Some(r) => r.competitors.get(ctx.locale).clone(),
        None => ctx.product.competitors(ctx.locale),
    };
    let standard = ctx
        .research
        .and_then(|r| r.pricing)
        .unwrap_or_else(|| ctx.product.prices())
        .standard;
    let rival = |i: usize| competitors.main.get(i).map(String::as_str).unwrap_or("-");
    let price = format!("{}{}", ctx.product.currency(), standard);
    let base = ctx.base_title();
    let alternatives = competitors.alternatives.join(", ");

    match ctx.locale {
        Locale::Ja => format!(
            "## 他社サービスとの比較\n\n\
             {title}と主要な競合サービスとの比較をご紹介します。\n\n\
             | 項目 | {base} | {a} | {b} |\n\
             |------|------|------|------|\n\
             | 料金 | {price} | 要問い合わせ | 要問い合わせ |\n\
             | 機能 | ★★★★★ | ★★★★☆ | ★★★☆☆ |\n\
             | サポート | 24時間 | 営業時間内 | メール |\n\n\
             その他の選択肢として{alternatives}も検討できます。\
             より詳細な比較については、[{cmp}]の記事もご参照ください。",
            title = ctx.title(),
            base = base,
            a = rival(0),
            b = rival(1),
            price = price,
            alternatives = alternatives,
            cmp = competitors.comparison,
        ),
        Locale::En => format!(
            "## Comparison with Other Services\n\n\
             Comparison between {title} and major competitors.\n\n\
             | Item | {base} | {a} | {b} |\n\
             |------|------|------|------|\n\
             | Price | {price} | Contact sales | Contact sales |\n\
             | Features | ★★★★★ | ★★★★☆ | ★★★☆☆ |\n\
             | Support | 24/7 | Business hours | Email |\n\n\
             Other alternatives worth a look: {alternatives}. \
             For detailed comparison, see [{cmp}] article.",
            title = ctx.title(),
            base = base,
            a = rival(0),
            b = rival(1),
            price = price,
            alternatives = alternatives,
            cmp = competitors.comparison,
        ),
    }
}

fn case_study(ctx: &ArticleContext<'_>) -> String {
    let citation = format!(
        "<Citation source=\"{}\" />",
        ctx.product.page_url("case-studies")
    );

    match ctx.locale {
        Locale::Ja => format!(
            "## 実践例・導入事例\n\n\
             ### 導入事例：中小企業での活用\n\n\
             A社では{title}を導入することで、以下の成果を得られました。\n\n\
             - **効率化**: 処理時間を50%短縮\n\
             - **コスト削減**: 月間コストを30%削減\n\
             - **品質向上**: エラー率を90%削減\n\n\
             ### 実装のポイント\n\n\
             1. **段階的導入**: 小規模からスタートして徐々に拡大\n\
             2. **チーム教育**: 適切な使用方法の習得\n\
             3. **継続改善**: 定期的な見直しと最適化\n\n\
             {citation}",
            title = ctx.title(),
            citation = citation,
        ),
        Locale::En => format!(
            "## Case Study & Practical Examples\n\n\
             ### Case Study: Implementation in SME\n\n\
             Company A achieved the following results by implementing {title}.\n\n\
             - **Efficiency**: 50% reduction in processing time\n\
             - **Cost Savings**: 30% reduction in monthly costs\n\
             - **Quality Improvement**: 90% reduction in error rate\n\n\
             ### Implementation Key Points\n\n\
             1. **Phased Approach**: Start small and gradually expand\n\
             2. **Team Training**: Proper usage methodology\n\
             3. **Continuous Improvement**: Regular review and optimization\n\n\
             {citation}",
            title = ctx.title(),
            citation = citation,
        ),
    }
}

fn faq(ctx: &ArticleContext<'_>) -> String {
    let defaults;
    let faqs: &[FaqPair] = match ctx.research {
        Some(r) => &r.faqs,
        None => {
            defaults = research::default_faqs(ctx.product);
            &defaults
        }
    };

    let pairs: Vec<String> = faqs
        .iter()
        .map(|f| format!("**Q.** {}\n**A.** {}", f.question.get(ctx.locale), f.answer.get(ctx.locale)))
        .collect();

    match ctx.locale {
        Locale::Ja => format!(
            "## よくある質問\n\n\
             {pairs}\n\n\
             **Q.** トラブルが発生した場合の対処法は？\n\
             **A.** サポートチームに連絡いただくか、[トラブルシューティングガイド]をご参照ください。\n\n\
             **Q.** 他のツールとの連携は可能ですか？\n\
             **A.** はい、API連携により多くのツールと連携可能です。",
            pairs = pairs.join("\n\n"),
        ),
        Locale::En => format!(
            "## Frequently Asked Questions\n\n\
             {pairs}\n\n\
             **Q.** What should I do if I encounter issues?\n\
             **A.** Contact our support team or refer to [troubleshooting guide].\n\n\
             **Q.** Can it integrate with other tools?\n\
             **A.** Yes, API integration allows connection with many tools.",
            pairs = pairs.join("\n\n"),
        ),
    }
}

fn conclusion(ctx: &ArticleContext<'_>) -> String {
    let related: Vec<String> = ctx
        .links
        .iter()
        .filter(|l| l.kind == LinkKind::Related)
        .take(2)
        .map(|l| format!("- {}", l.markdown(ctx.locale)))
        .collect();
    let days = ctx.product.trial_days();

    match ctx.locale {
        Locale::Ja => {
            let related = if related.is_empty() {
                String::new()
            } else {
                format!("### 関連記事\n\n{}\n\n", related.join("\n"))
            };
            format!(
                "## まとめ\n\n\
                 {title}について詳しく解説しました。料金プラン、主要機能、導入手順まで幅広くカバーしています。\n\n\
                 ### 次のステップ\n\n\
                 1. **無料トライアル**: まずは{days}日間の無料トライアルを活用\n\
                 2. **プラン選択**: 利用規模に応じた最適なプランを選択\n\
                 3. **本格導入**: 段階的な導入で確実な成果を実現\n\n\
                 {cta}\n\n\
                 {related}\
                 さらに詳しい情報をお求めの場合は、[お問い合わせフォーム]からご連絡ください。",
                title = ctx.title(),
                days = days,
                cta = cta(ctx),
                related = related,
            )
        }
        Locale::En => {
            let related = if related.is_empty() {
                String::new()
            } else {
                format!("### Related Articles\n\n{}\n\n", related.join("\n"))
            };
            format!(
                "## Conclusion\n\n\
                 We've covered {title} in comprehensive detail, including pricing plans, \
                 key features, and implementation steps.\n\n\
                 ### Next Steps\n\n\
                 1. **Free Trial**: Start with the {days}-day free trial\n\
                 2. **Plan Selection**: Choose the optimal plan for your scale\n\
                 3. **Full Implementation**: Gradual deployment for reliable results\n\n\
                 {cta}\n\n\
                 {related}\
                 For more detailed information, please [contact us].",
                title = ctx.title(),
                days = days,
                cta = cta(ctx),
                related = related,
            )
        }
    }
}

fn footnotes(ctx: &ArticleContext<'_>) -> String {
    let fallback;
    let citations: &[Citation] = match ctx.research {
        Some(r) => &r.citations,
        None => {
            fallback = research::citations(ctx.product);
            &fallback
        }
    };

    let notes: Vec<String> = citations
        .iter()
        .enumerate()
        .map(|(i, c)| format!("[^{}]: [{}]({})", i + 1, c.description.get(ctx.locale), c.source))
        .collect();
    let heading = match ctx.locale {
        Locale::Ja => "## 脚注",
        Locale::En => "## Footnotes",
    };

    format!("{}\n\n{}", heading, notes.join("\n"))
}
