//! Prompts used by the drafting assistant.
//!
//! All prompts the system uses to generate responses live here, so the
//! assistant's behavior can be tuned without touching the request flow.

/// System prompt for general conversation analysis.
pub const SYSTEM_GENERAL: &str = "Você é um assistente especializado em analisar conversas de \
atendimento ao cliente de um escritório de advocacia especializado em Direito do Consumidor, \
com foco em Direito Aéreo e Planos de Saúde. Suas respostas devem ser profissionais, claras e \
objetivas, sempre considerando o contexto jurídico específico dessas áreas.";

/// System prompt for reply suggestions.
pub const SYSTEM_SUGGESTION: &str = "Você é um assistente especializado em atendimento ao \
cliente de um escritório de advocacia especializado em Direito do Consumidor, com foco em \
Direito Aéreo e Planos de Saúde. Suas respostas devem ser profissionais, claras e objetivas, \
sempre considerando o contexto jurídico específico dessas áreas.";

/// System prompt for the document checklist.
pub const SYSTEM_DOCUMENTS: &str = "Você é um assistente especializado em análise de documentos \
para processos de Direito do Consumidor, com foco em Direito Aéreo e Planos de Saúde. Crie uma \
checklist clara e organizada dos documentos, usando emojis para indicar o status de cada um. \
Para documentos já enviados, SEMPRE mencione o nome exato do arquivo enviado para que seja \
possível adicionar o link posteriormente.";

/// System prompt for case analysis.
pub const SYSTEM_CASE_ANALYSIS: &str = "Você é um assistente especializado em análise de casos \
de Direito do Consumidor, com foco em Direito Aéreo e Planos de Saúde. Forneça apenas uma nota \
de 0 a 10 e um breve resumo justificando a avaliação. Seja objetivo e direto.";

/// User prompt for answering a free-form question about a conversation.
pub fn general_analysis(conversation: &str, question: &str) -> String {
    format!(
        "Analise a seguinte conversa e responda à pergunta do usuário:\n\n\
         {conversation}\n\n\
         Pergunta do usuário: {question}\n\n\
         Resposta:"
    )
}

/// User prompt for suggesting a reply to the client's last message.
pub fn suggestion(conversation: &str, last_client_message: &str) -> String {
    format!(
        "Analise a seguinte conversa e sugira uma resposta profissional e adequada para a \
         última mensagem do cliente:\n\n\
         {conversation}\n\n\
         Última mensagem do cliente: {last_client_message}\n\n\
         Sugestão de resposta:"
    )
}

/// User prompt for the document checklist.
pub fn documents_checklist(conversation: &str) -> String {
    format!(
        "Analise a seguinte conversa e:\n\n\
         1. Primeiro, identifique o tipo de caso (aéreo ou plano de saúde)\n\
         2. Depois, crie uma checklist APENAS dos documentos necessários para esse tipo \
         específico de caso.\n\n\
         Use:\n\
         ✅ - Documento já enviado\n\
         ❌ - Documento faltando\n\
         ⚠️ - Documento parcialmente enviado/incompleto\n\n\
         Considere apenas os grupos e documentos aplicáveis ao tipo de caso.\n\n\
         Para casos AÉREOS, documentos típicos incluem:\n\
         - Documentos Pessoais (RG, CPF, comprovante de residência)\n\
         - Bilhetes/cartões de embarque\n\
         - Comprovantes de despesas extras\n\
         - Protocolos de reclamação com a companhia\n\
         - E-mails ou registros de comunicação com a empresa\n\n\
         Para casos de PLANO DE SAÚDE, documentos típicos incluem:\n\
         - Documentos Pessoais (RG, CPF, comprovante de residência)\n\
         - Carteirinha do plano\n\
         - Documentos médicos (laudos, exames, prescrições)\n\
         - Negativas do plano\n\
         - Orçamentos médicos\n\
         - Comprovantes de pagamento\n\n\
         NÃO inclua na checklist documentos que não se aplicam ao tipo de caso identificado.\n\
         Para documentos já enviados, mencione o nome exato do arquivo para que eu possa \
         adicionar o link posteriormente.\n\n\
         Conversa analisada:\n\
         {conversation}\n\n\
         Comece identificando o tipo de caso e depois liste apenas os documentos pertinentes."
    )
}

/// User prompt for scoring a case's chances of success.
pub fn case_analysis(conversation: &str) -> String {
    format!(
        "Analise a seguinte conversa e avalie as chances de sucesso do processo judicial:\n\n\
         1. Força das Evidências\n\
         2. Dano Demonstrável\n\
         3. Jurisprudência Favorável\n\
         4. Requisitos Legais\n\n\
         Conversa analisada:\n\
         {conversation}\n\n\
         Forneça apenas:\n\
         1. Uma nota de 0 a 10 para as chances de sucesso\n\
         2. Um breve resumo em 2-3 linhas justificando a nota"
    )
}
